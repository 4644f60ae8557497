//! Error adapter for converting CLI and colony errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Each error gets a
//! stable code and, where the fix is known, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use colony_graph::{ColonyError, ResolutionError};

use crate::error::CliError;

/// Adapter for an error that aborted one colony.
pub struct ColonyDiagnostic<'a> {
    /// Planet name or input position of the failed colony
    label: &'a str,
    /// The wrapped error
    error: &'a ColonyError,
}

impl<'a> ColonyDiagnostic<'a> {
    /// Create a new colony diagnostic.
    pub fn new(label: &'a str, error: &'a ColonyError) -> Self {
        Self { label, error }
    }
}

impl fmt::Debug for ColonyDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColonyDiagnostic")
            .field("label", &self.label)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for ColonyDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "colony {}: {}", self.label, self.error)
    }
}

impl std::error::Error for ColonyDiagnostic<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.error)
    }
}

impl MietteDiagnostic for ColonyDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.error {
            ColonyError::Validation(_) => "colony_graph::validation",
            ColonyError::Resolution(_) => "colony_graph::resolution",
            ColonyError::Integrity(_) => "colony_graph::integrity",
            ColonyError::Config(_) => "colony_graph::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.error {
            ColonyError::Validation(_) => {
                "check the record against the colony layout format (pins, links, routes)"
            }
            ColonyError::Resolution(ResolutionError::InvalidOrdinal { .. }) => {
                "commodity ordinals in the catalog must lie between 1 and 83"
            }
            ColonyError::Resolution(_) => "add the missing id to the catalog file",
            ColonyError::Integrity(_) => {
                "links and routes may only join pins of the same colony"
            }
            ColonyError::Config(_) => "fix the [style] section of the configuration file",
        };
        Some(Box::new(help))
    }
}

/// Adapter for [`CliError`].
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) => "colony_graph::io",
            CliError::Config(_) => "colony_graph::config",
            CliError::Catalog { .. } => "colony_graph::catalog",
            CliError::Read { .. } => "colony_graph::read",
            CliError::Input { .. } => "colony_graph::input",
            CliError::Failed { .. } => "colony_graph::failed",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Config(_) => "pass --config with a valid TOML file, or remove it to use defaults",
            CliError::Catalog { .. } => {
                "the catalog is a JSON object with `types`, `schematics` and `commodities` tables"
            }
            CliError::Input { .. } => "colony files hold one JSON record or an array of records",
            CliError::Failed { .. } => "see the errors reported above for each failed colony",
            CliError::Io(_) | CliError::Read { .. } => return None,
        };
        Some(Box::new(help))
    }
}

/// Render a diagnostic with miette's graphical report handler.
///
/// Falls back to the plain message if rendering fails.
pub fn render(diagnostic: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, diagnostic) {
        Ok(()) => writer,
        Err(_) => diagnostic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use colony_graph::{EdgeKind, IntegrityError, identifier::PinId};
    use colony_graph_loader::{LoadError, ValidationError};

    use super::*;

    fn code(diagnostic: &dyn MietteDiagnostic) -> String {
        diagnostic.code().map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_colony_codes_per_variant() {
        let integrity = ColonyError::Integrity(IntegrityError {
            kind: EdgeKind::Route,
            source_pin: PinId::new(1),
            destination_pin: PinId::new(2),
            missing: PinId::new(2),
        });
        let config = ColonyError::Config("Invalid link_color".to_string());

        let diagnostic = ColonyDiagnostic::new("Tanoo I", &integrity);
        assert_eq!(code(&diagnostic), "colony_graph::integrity");
        assert!(diagnostic.help().is_some());
        assert_eq!(
            diagnostic.to_string(),
            "colony Tanoo I: Integrity error: route 1 -> 2 references unknown pin 2"
        );

        assert_eq!(
            code(&ColonyDiagnostic::new("x", &config)),
            "colony_graph::config"
        );
    }

    #[test]
    fn test_invalid_ordinal_has_specific_help() {
        let err = ColonyError::Resolution(ResolutionError::InvalidOrdinal {
            content_type_id: 9000,
            uid: 84,
        });
        let diagnostic = ColonyDiagnostic::new("Tanoo I", &err);

        let help = diagnostic.help().map(|h| h.to_string()).unwrap();
        assert!(help.contains("between 1 and 83"));
        assert_eq!(code(&diagnostic), "colony_graph::resolution");
    }

    #[test]
    fn test_cli_error_codes() {
        let input = CliError::Input {
            path: PathBuf::from("colonies.json"),
            source: LoadError::Validation(ValidationError::Malformed("EOF".to_string())),
        };
        let failed = CliError::Failed { failed: 1, total: 3 };

        assert_eq!(code(&ErrorAdapter(&input)), "colony_graph::input");
        assert_eq!(code(&ErrorAdapter(&failed)), "colony_graph::failed");
        assert_eq!(
            ErrorAdapter(&failed).to_string(),
            "1 of 3 colonies failed to build"
        );
    }

    #[test]
    fn test_render_is_not_empty() {
        let err = CliError::Failed { failed: 2, total: 2 };
        assert!(!render(&ErrorAdapter(&err)).is_empty());
    }
}
