//! CLI command implementations.

use std::path::Path;

use matmodel_io::validator::{validate_export, validate_registry};
use matmodel_io::{BindingDescriptor, ExportConfig, ExportFormat, RegistryExport};
use matmodel_registry::{ModelKind, ModelUuids};
use matmodel_types::{MatModelError, MatModelResult, ModelCategory};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// List declared models, optionally for one category.
pub fn list(category: Option<&str>) -> CmdResult {
    let groups = grouped_models(category)?;

    let mut listed = 0;
    for (cat, kinds) in &groups {
        listed += kinds.len();
        println!("{cat}");
        for kind in kinds {
            println!("  {:<26} {}", kind.name(), kind.uuid_str());
        }
        println!();
    }

    println!("{listed} models");
    Ok(())
}

/// Non-empty categories with their models, optionally for one category.
fn grouped_models(category: Option<&str>) -> MatModelResult<Vec<(ModelCategory, Vec<ModelKind>)>> {
    let registry = ModelUuids::global();
    let categories: Vec<ModelCategory> = match category {
        Some(name) => vec![name.parse()?],
        None => ModelCategory::all().to_vec(),
    };

    Ok(categories
        .into_iter()
        .map(|cat| (cat, registry.by_category(cat)))
        .filter(|(_, kinds)| !kinds.is_empty())
        .collect())
}

/// Print the UUID for one model name.
pub fn get(name: &str) -> CmdResult {
    let registry = ModelUuids::global();
    match registry.get(name) {
        Ok(uuid) => {
            println!("{uuid}");
            Ok(())
        }
        Err(e) => Err(with_suggestions(registry, name, e).into()),
    }
}

/// Print the model a UUID identifies.
pub fn lookup(uuid: &str) -> CmdResult {
    // Surface malformed input as a parse error rather than a miss.
    matmodel_types::ModelUuid::parse(uuid)?;

    let kind = ModelUuids::global()
        .find_by_uuid(uuid)
        .ok_or_else(|| format!("No model has UUID {uuid}"))?;

    println!("{}  ({})", kind.name(), kind.category());
    println!("  {}", kind.doc());
    Ok(())
}

/// Export the registry (or a binding descriptor) to a file or stdout.
pub fn export(
    config_path: Option<&str>,
    output_path: Option<&str>,
    format: Option<&str>,
    bindings: bool,
) -> CmdResult {
    let config = match config_path {
        Some(path) => ExportConfig::load(Path::new(path))?,
        None => ExportConfig::default(),
    };
    let requested = format.map(str::parse::<ExportFormat>).transpose()?;
    let format = config.resolve_format(requested, output_path.map(Path::new));

    let registry = ModelUuids::global();
    let text = if bindings {
        BindingDescriptor::from_registry(registry, &config)?.render(format)?
    } else {
        RegistryExport::from_registry(registry, &config)?.render(format)?
    };

    match output_path {
        Some(path) => {
            std::fs::write(path, &text)?;
            tracing::info!(path, "export written");
            println!("Export written to: {path}");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Validate an export file against the built-in registry.
pub fn validate(path: &str) -> CmdResult {
    let export = RegistryExport::load(Path::new(path))?;
    validate_export(&export, ModelUuids::global())?;
    println!("✅ {path} is valid ({} entries).", export.len());
    Ok(())
}

/// Self-check the built-in registry.
pub fn check() -> CmdResult {
    let registry = ModelUuids::global();
    validate_registry(registry)?;
    println!("✅ Registry is valid ({} models, all UUIDs distinct).", registry.len());
    Ok(())
}

fn with_suggestions(registry: &ModelUuids, name: &str, err: MatModelError) -> String {
    let close = registry.suggestions(name);
    if close.is_empty() {
        format!("{err}. Run `matmodel list` for all names")
    } else {
        format!("{err}. Did you mean: {}", close.join(", "))
    }
}
