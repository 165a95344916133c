// ABOUTME: JSON input and output helpers for food lists and meal logs
// ABOUTME: Reads files with path-aware errors and writes pretty JSON to files or stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use pierre_core::models::FoodItem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Read and deserialize a JSON document
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` if it
/// cannot be read, and `InvalidFormat` if it is not valid JSON of the expected shape
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let path_label = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(path_label.clone()).with_source(e)
        } else {
            AppError::from(e).with_resource_id(path_label.clone())
        }
    })?;
    debug!(path = %path_label, bytes = contents.len(), "Read JSON input");
    serde_json::from_str(&contents).map_err(|e| AppError::from(e).with_resource_id(path_label))
}

/// Read a JSON array of food items
///
/// # Errors
///
/// Same as [`read_json`]
pub fn read_food_list(path: &Path) -> AppResult<Vec<FoodItem>> {
    read_json(path)
}

/// Serialize a value as pretty JSON into a writer, followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or writing fails
pub fn write_json_to<W: Write, T: Serialize>(mut writer: W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a value as pretty JSON to `output`, or to stdout when `None`
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_json<T: Serialize>(output: Option<&Path>, value: &T) -> AppResult<()> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
            write_json_to(io::BufWriter::new(file), value)
        }
        None => write_json_to(io::stdout().lock(), value),
    }
}
