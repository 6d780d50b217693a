use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use coyote_syntax::{AbstractSyntaxTree, Field};
use coyote_validator::Value;
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::{CoyoteError, Result};
use crate::pipeline::{compile, decode, validate_schema};

/// File suffix recognized when loading a schema directory.
pub const SCHEMA_SUFFIX: &str = ".coyote";

/// Name-keyed cache of compiled schemas.
///
/// Compiled trees are immutable, so a registry can be shared across threads
/// once populated.
pub struct SchemaRegistry {
    schemas: HashMap<String, AbstractSyntaxTree>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            schemas: HashMap::new(),
            config,
        }
    }

    /// Compile and register schema source under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, source: &str) -> Result<()> {
        let name = name.into();
        let schema = compile(source)?;
        debug!(%name, fields = schema.len(), "registered schema");
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Load every `*.coyote` file in a directory; the file stem becomes the name.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, RegistryConfig::default())
    }

    /// Load schemas from a directory with explicit config.
    pub fn from_directory_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::with_config(config);
        let mut loaded = 0usize;

        let entries = std::fs::read_dir(path)
            .map_err(|err| CoyoteError::LoadFailed(format!("{}: {err}", path.display())))?;

        for entry in entries {
            let entry = entry.map_err(|err| CoyoteError::LoadFailed(err.to_string()))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some(name) = file_name.strip_suffix(SCHEMA_SUFFIX) else {
                continue;
            };

            let entry_path = entry.path();
            let file_type = std::fs::symlink_metadata(&entry_path)
                .map_err(|err| CoyoteError::LoadFailed(err.to_string()))?
                .file_type();
            if file_type.is_symlink() {
                return Err(CoyoteError::LoadFailed(format!(
                    "refusing to load schema symlink: {file_name}"
                )));
            }
            if !file_type.is_file() {
                continue;
            }
            if name.is_empty() {
                return Err(CoyoteError::LoadFailed(format!(
                    "unrecognized schema filename: {file_name}"
                )));
            }

            loaded = loaded.saturating_add(1);
            if loaded > registry.config.max_schemas_from_directory {
                return Err(CoyoteError::LoadFailed(format!(
                    "schema count exceeds configured max ({}): {}",
                    registry.config.max_schemas_from_directory, loaded
                )));
            }

            let source = read_limited(&entry_path, registry.config.max_schema_file_size)?;
            registry.register(name, &source)?;
        }

        info!(path = %path.display(), schemas = loaded, "loaded schema directory");
        Ok(registry)
    }

    /// Load from embedded `(name, source)` pairs.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        let mut registry = Self::new();
        for (name, source) in schemas {
            registry.register(*name, source)?;
        }
        Ok(registry)
    }

    /// Decode a JSON payload and validate it against the named schema.
    pub fn validate(&self, name: &str, payload: &[u8]) -> Result<()> {
        match self.schemas.get(name) {
            Some(schema) => validate_schema(&decode(payload)?, schema),
            None => self.missing(name),
        }
    }

    /// Validate decoded data against the named schema.
    pub fn validate_value(&self, name: &str, data: &Value) -> Result<()> {
        match self.schemas.get(name) {
            Some(schema) => validate_schema(data, schema),
            None => self.missing(name),
        }
    }

    fn missing(&self, name: &str) -> Result<()> {
        if self.config.fail_on_missing_schema {
            return Err(CoyoteError::NoSchema(name.to_string()));
        }
        Ok(())
    }

    /// Compiled tree registered under `name`.
    pub fn get(&self, name: &str) -> Option<&[Field]> {
        self.schemas.get(name).map(Vec::as_slice)
    }

    /// Check if a schema is registered under `name`.
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered schema names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn read_limited(path: &Path, max_bytes: usize) -> Result<String> {
    let file = std::fs::File::open(path).map_err(|err| {
        CoyoteError::LoadFailed(format!("failed opening schema {}: {err}", path.display()))
    })?;
    let size = file
        .metadata()
        .map_err(|err| CoyoteError::LoadFailed(err.to_string()))?
        .len();
    if size > max_bytes as u64 {
        return Err(CoyoteError::LoadFailed(format!(
            "schema file too large ({size} bytes): {}",
            path.display()
        )));
    }

    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut source = String::new();
    file.take(read_limit)
        .read_to_string(&mut source)
        .map_err(|err| {
            CoyoteError::LoadFailed(format!("failed reading schema {}: {err}", path.display()))
        })?;
    if source.len() > max_bytes {
        return Err(CoyoteError::LoadFailed(format!(
            "schema file too large while reading: {}",
            path.display()
        )));
    }
    Ok(source)
}
