//! Notification des troncatures : message utilisateur + log

use geocoder::{Notifier, TruncationWarning};
use tracing::warn;

/// Affiche l'avertissement sur stderr et le journalise (cible `geocoder`)
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier {
    /// N'écrit que dans les logs
    pub quiet: bool,
}

impl TracingNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for TracingNotifier {
    fn warn(&self, warning: &TruncationWarning) {
        if !self.quiet {
            eprintln!("warning: {}", warning);
        }
        warn!(
            target: "geocoder",
            field = %warning.field,
            dumper = %warning.dumper,
            max_length = warning.max_length,
            original_length = warning.original_length,
            "{}",
            warning
        );
    }
}
