use super::*;
use crate::datasets::Sample;

#[test]
fn test_vec_dataset_new() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(dataset.len(), 5);
    assert!(!dataset.is_empty());
}

#[test]
fn test_vec_dataset_get_valid_index() -> Result<(), MicrogradError> {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0)?, 10);
    assert_eq!(dataset.get(2)?, 30);
    Ok(())
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset: VecDataset<i32> = vec![10, 20, 30].into();
    assert_eq!(
        dataset.get(3),
        Err(MicrogradError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<Sample> = VecDataset::new(Vec::new());
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_dataset_by_reference() -> Result<(), MicrogradError> {
    let dataset = VecDataset::new(vec![Sample::new(vec![1.0], vec![0.0])]);
    let borrowed = &dataset;
    assert_eq!(Dataset::len(&borrowed), 1);
    assert_eq!(Dataset::get(&borrowed, 0)?.input, vec![1.0]);
    Ok(())
}
