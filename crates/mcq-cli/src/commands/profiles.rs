use mcq_core::error::McqError;
use mcq_core::profiles::builtin;
use mcq_core::profiles::schema::CleanProfile;
use std::path::Path;

pub fn list() -> Result<(), McqError> {
    println!("Available cleaning profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<12} {} (v{}){}",
            name, profile.name, profile.version, default_marker
        );
        if let Some(ref desc) = profile.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), McqError> {
    let profile = builtin::load_preset(preset)?;
    print_profile(&profile);
    Ok(())
}

fn print_profile(profile: &CleanProfile) {
    println!("{} (version {})\n", profile.name, profile.version);

    if let Some(ref desc) = profile.description {
        println!("{}\n", desc);
    }

    if profile.footer_patterns.is_empty() {
        println!("Footer patterns: none");
    } else {
        println!("Footer patterns (every match is removed from each line):");
        for pattern in &profile.footer_patterns {
            println!("  {}", pattern);
        }
    }
    println!();

    if profile.strip_page_numbers {
        println!("Trailing digits at the end of each line are removed as page numbers.");
        println!("Note: this also removes numbers that legitimately end a line.");
    } else {
        println!("Trailing digits are kept.");
    }
    println!();
}

pub fn schema() -> Result<(), McqError> {
    print!(
        r#"JSON Cleaning Profile Schema
============================

A cleaning profile tells `mcq parse` which boilerplate to strip from each
line of extracted PDF text before it is stored in a question record.

Top-level fields:
  name                (string, required)  Human-readable name of the profile
  description         (string, optional)  What kind of document it is for
  version             (string, required)  Version identifier (e.g., "2024.1")
  footer_patterns     (array, optional)   Regular expressions (Rust regex
                                          syntax). Every match is removed
                                          from every line. Default: []
  strip_page_numbers  (bool, optional)    Remove a run of digits at the very
                                          end of each line. Default: true

Example:
{{
  "name": "Vendor X practice exams",
  "description": "Removes the Vendor X copyright banner",
  "version": "1.0",
  "footer_patterns": [
    "Copyright \\(c\\) Vendor X, all rights reserved\\.?",
    "Page [0-9]+ of [0-9]+"
  ],
  "strip_page_numbers": true
}}

Note: backslashes must be doubled inside JSON strings.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), McqError> {
    let profile = mcq_core::profiles::load_profile(file)?;

    println!(
        "Profile '{}' (v{}) is valid.",
        profile.name, profile.version
    );
    println!("  Footer patterns: {}", profile.footer_patterns.len());
    println!(
        "  Page number strip: {}",
        if profile.strip_page_numbers { "on" } else { "off" }
    );

    if profile.footer_patterns.is_empty() && !profile.strip_page_numbers {
        println!("\nWarnings:");
        println!("  - profile removes nothing; lines are only trimmed");
    }

    Ok(())
}
