/*!
 * Tests for file utilities
 */

use anyhow::Result;
use brevity::file_utils::FileManager;
use crate::common;

#[test]
fn test_read_input_withFilePath_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_article(temp_dir.path(), "article.txt")?;

    let content = FileManager::read_input(&path)?;
    assert_eq!(content, common::ARTICLE);
    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = FileManager::read_to_string(temp_dir.path().join("missing.txt"));
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_write_to_file_shouldCreateParentDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("deeper").join("summary.txt");

    FileManager::write_to_file(&path, "A summary.")?;
    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path)?, "A summary.");
    Ok(())
}
