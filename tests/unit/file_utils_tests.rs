/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use srtconv::file_utils::FileManager;
use crate::common;

#[test]
fn test_fileExists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    Ok(())
}

#[test]
fn test_readToString_withMissingFile_shouldFail() {
    assert!(FileManager::read_to_string("non_existent_file_12345.srt").is_err());
}

#[test]
fn test_writeAtomic_shouldCreateParentsAndReplaceContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested").join("dir").join("out.txt");

    FileManager::write_atomic(&target, "first")?;
    assert_eq!(fs::read_to_string(&target)?, "first");

    FileManager::write_atomic(&target, "second")?;
    assert_eq!(fs::read_to_string(&target)?, "second");

    // Only the destination file remains, no temporary leftovers
    let files: Vec<_> = fs::read_dir(target.parent().unwrap())?.collect();
    assert_eq!(files.len(), 1);
    Ok(())
}
