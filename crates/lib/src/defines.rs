//! Build-time macro definitions.
//!
//! Macro definitions are `NAME=VALUE` overrides forwarded to the EDK2 build
//! tool as repeated `-D` flags. Names are case-normalized to upper so that
//! `-D universal_payload=TRUE` and `-D UNIVERSAL_PAYLOAD=TRUE` refer to the
//! same macro.

use std::collections::BTreeMap;

use crate::error::BuildError;

/// Parse a single `NAME=VALUE` macro argument.
///
/// The argument must contain exactly one `=`; anything else is a fatal input
/// error, raised before any external command runs.
pub fn parse_define(raw: &str) -> Result<(String, String), BuildError> {
  let trimmed = raw.trim();
  if trimmed.matches('=').count() != 1 {
    return Err(BuildError::InvalidDefine(raw.to_string()));
  }

  // Split is infallible here: exactly one separator is present.
  let (name, value) = match trimmed.split_once('=') {
    Some(pair) => pair,
    None => return Err(BuildError::InvalidDefine(raw.to_string())),
  };

  Ok((name.to_uppercase(), value.to_string()))
}

/// An ordered, read-only-after-construction set of macro definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineSet {
  defines: BTreeMap<String, String>,
}

impl DefineSet {
  /// An empty set.
  pub fn new() -> Self {
    Self::default()
  }

  /// The default set for a payload build: `UNIVERSAL_PAYLOAD=TRUE`.
  pub fn seeded() -> Self {
    let mut set = Self::new();
    set.insert("UNIVERSAL_PAYLOAD", "TRUE");
    set
  }

  /// Build the set for a run: the seed macro plus every user argument.
  ///
  /// User values are inserted after the seed, so an explicit
  /// `UNIVERSAL_PAYLOAD=...` wins over the default.
  pub fn from_args<I, S>(args: I) -> Result<Self, BuildError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut set = Self::seeded();
    for raw in args {
      let (name, value) = parse_define(raw.as_ref())?;
      set.defines.insert(name, value);
    }
    Ok(set)
  }

  /// Insert a definition, normalizing the name to upper case.
  pub fn insert(&mut self, name: &str, value: &str) {
    self.defines.insert(name.to_uppercase(), value.to_string());
  }

  /// Look up a definition by (case-insensitive) name.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.defines.get(&name.to_uppercase()).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.defines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.defines.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.defines.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Render the set as repeated `-D NAME=VALUE` argv pairs.
  pub fn to_args(&self) -> Vec<String> {
    let mut args = Vec::with_capacity(self.defines.len() * 2);
    for (name, value) in &self.defines {
      args.push("-D".to_string());
      args.push(format!("{}={}", name, value));
    }
    args
  }
}
