//! Human-readable rendering of a probe report.

use crate::loader::LoadOutcome;
use crate::ui::UserInterface;

use super::report::{ExtensionReport, Listing, ProbeReport};

/// Write a report as one line per observation.
///
/// When the custom directory is missing exactly two lines are written:
/// the environment variable and the missing directory.
pub fn render_report(report: &ProbeReport, ui: &mut dyn UserInterface) {
    ui.message(&format!("{} = {:?}", report.env_var, report.raw_value));

    let Some(listing) = &report.custom_dir_listing else {
        ui.warning(&format!(
            "Custom directory does not exist: {}",
            report.custom_dir.display()
        ));
        return;
    };

    ui.message(&format!("Custom directory: {}", report.custom_dir.display()));
    render_listing(ui, "Contents", listing);

    for extension in &report.extensions {
        render_extension(ui, extension);
    }
}

fn render_extension(ui: &mut dyn UserInterface, extension: &ExtensionReport) {
    ui.show_header(&format!("Extension: {}", extension.name));

    for check in &extension.levels {
        if !check.exists {
            ui.warning(&format!(
                "{} does not exist: {}",
                check.level.label(),
                check.path.display()
            ));
            return;
        }

        ui.success(&format!("{} exists: {}", check.level.label(), check.path.display()));
        if let Some(listing) = &check.listing {
            render_listing(ui, "  Contents", listing);
        }
    }

    let Some(file) = &extension.module_file else {
        return;
    };
    match file.size {
        Some(size) if file.exists => ui.success(&format!(
            "Module file exists: {} ({} bytes)",
            file.path.display(),
            size
        )),
        _ => {
            ui.warning(&format!(
                "Module file does not exist: {}",
                file.path.display()
            ));
            return;
        }
    }

    match &extension.load {
        Some(LoadOutcome::Loaded { exports }) => {
            ui.success(&format!("Module loaded, exports: {}", join_or_none(exports)));
        }
        Some(LoadOutcome::Failed { error }) => {
            ui.warning(&format!("Failed to load module: {}", error));
        }
        Some(LoadOutcome::Unsupported { reason }) => {
            ui.warning(&format!("Module load unsupported: {}", reason));
        }
        None => {}
    }
}

fn render_listing(ui: &mut dyn UserInterface, label: &str, listing: &Listing) {
    match listing {
        Listing::Entries(entries) => ui.message(&format!("{}: {}", label, join_or_none(entries))),
        Listing::Unreadable(err) => ui.warning(&format!("{}: unreadable ({})", label, err)),
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
