use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(Contact::export_to_string()?));
    types.push(clean_type(CreateContactRequest::export_to_string()?));
    types.push(clean_type(UpdateContactRequest::export_to_string()?));
    types.push(clean_type(ContactFilters::export_to_string()?));

    // Activity types
    types.push(clean_type(Activity::export_to_string()?));
    types.push(clean_type(CreateActivityRequest::export_to_string()?));
    types.push(clean_type(ActivityFilters::export_to_string()?));

    // User types
    types.push(clean_type(CreateUserRequest::export_to_string()?));
    types.push(clean_type(UserResponse::export_to_string()?));

    // Dashboard
    types.push(clean_type(DashboardMetrics::export_to_string()?));

    // Responses
    types.push(clean_type(ValidationIssue::export_to_string()?));
    types.push(clean_type(ErrorResponse::export_to_string()?));
    types.push(clean_type(MessageResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Strips the ts-rs banner and imports, since every type lands in the same file.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
