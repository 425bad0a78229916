//! # Code Translation Subcommands
//!
//! ```bash
//! retrofit decode improvement-type 62
//! retrofit decode country SCT
//! retrofit translate assessment.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use retrofit_codes::{
    decode_country, tables, translate_assessment, CodeTable, Decoded, RawAssessment,
};
use retrofit_core::Labelled;

use crate::print_json;

/// Exported fields with a code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeField {
    /// Electricity meter type.
    MeterType,
    /// Property type.
    PropertyType,
    /// Built form.
    BuiltForm,
    /// Glazed area.
    GlazedArea,
    /// Element efficiency rating.
    EfficiencyRating,
    /// Multiple glazing type.
    MultipleGlazingType,
    /// Flat level.
    FlatLevel,
    /// Heat loss corridor.
    HeatLossCorridor,
    /// Orientation.
    Orientation,
    /// Overshading.
    Overshading,
    /// Suggested improvement type.
    ImprovementType,
    /// Country code (EAW, SCT, NIR).
    Country,
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Field the code belongs to.
    #[arg(value_enum)]
    pub field: CodeField,

    /// Raw code as exported.
    pub code: String,
}

/// Arguments for `translate`.
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Raw assessment JSON file.
    pub path: PathBuf,

    /// Exit with status 1 when any value is unmapped.
    #[arg(long)]
    pub strict: bool,
}

/// Result of decoding one code: the value's label, or why there is none.
fn describe<T: Labelled>(decoded: Decoded<T>) -> Decoded<&'static str> {
    match decoded {
        Decoded::Value(v) => Decoded::Value(v.label()),
        Decoded::Absent => Decoded::Absent,
        Decoded::Unmapped => Decoded::Unmapped,
    }
}

fn lookup<T: Labelled>(table: &CodeTable<T>, code: &str) -> Decoded<&'static str> {
    describe(table.lookup(code))
}

/// Decode `code` for `field`.
pub fn decode_field(field: CodeField, code: &str) -> Decoded<&'static str> {
    match field {
        CodeField::MeterType => lookup(&tables::METER_TYPE, code),
        CodeField::PropertyType => lookup(&tables::PROPERTY_TYPE, code),
        CodeField::BuiltForm => lookup(&tables::BUILT_FORM, code),
        CodeField::GlazedArea => lookup(&tables::GLAZED_AREA, code),
        CodeField::EfficiencyRating => lookup(&tables::EFFICIENCY_RATING, code),
        CodeField::MultipleGlazingType => lookup(&tables::MULTIPLE_GLAZING_TYPE, code),
        CodeField::FlatLevel => lookup(&tables::FLAT_LEVEL, code),
        CodeField::HeatLossCorridor => lookup(&tables::HEAT_LOSS_CORRIDOR, code),
        CodeField::Orientation => lookup(&tables::ORIENTATION, code),
        CodeField::Overshading => lookup(&tables::OVERSHADING, code),
        CodeField::ImprovementType => lookup(&tables::IMPROVEMENT_TYPE, code),
        CodeField::Country => match decode_country(code) {
            Some(country) => Decoded::Value(country.label()),
            None if code.trim() == retrofit_codes::NOT_DETERMINED => Decoded::Absent,
            None => Decoded::Unmapped,
        },
    }
}

/// Execute `decode`.
pub fn run_decode(args: &DecodeArgs) -> Result<u8> {
    match decode_field(args.field, &args.code) {
        Decoded::Value(label) => {
            println!("{label}");
            Ok(0)
        }
        Decoded::Absent => {
            println!("(absent)");
            Ok(0)
        }
        Decoded::Unmapped => {
            eprintln!("unmapped code {:?}", args.code);
            Ok(1)
        }
    }
}

/// Execute `translate`.
pub fn run_translate(args: &TranslateArgs) -> Result<u8> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let raw: RawAssessment = serde_json::from_str(&content)
        .with_context(|| format!("invalid assessment JSON in {}", args.path.display()))?;
    let translation = translate_assessment(&raw).context("banding table defect")?;

    print_json(&translation)?;
    if !translation.unmapped.is_empty() {
        tracing::info!(count = translation.unmapped.len(), "values left unmapped");
        if args.strict {
            return Ok(1);
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_outcome() {
        assert_eq!(
            decode_field(CodeField::Country, "SCT"),
            Decoded::Value("Scotland")
        );
        assert_eq!(decode_field(CodeField::Country, "ND"), Decoded::Absent);
        assert_eq!(decode_field(CodeField::Country, "XYZ"), Decoded::Unmapped);
        assert_eq!(decode_field(CodeField::FlatLevel, "99"), Decoded::Absent);
        assert_eq!(decode_field(CodeField::ImprovementType, "33"), Decoded::Unmapped);
        assert!(matches!(
            decode_field(CodeField::ImprovementType, "62"),
            Decoded::Value(_)
        ));
    }

    #[test]
    fn translate_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessment.json");
        std::fs::write(
            &path,
            r#"{"country_code": "EAW", "construction_year": "1936", "energy_rating_current": "64", "built_form": "foo"}"#,
        )
        .unwrap();
        let lenient = TranslateArgs {
            path: path.clone(),
            strict: false,
        };
        assert_eq!(run_translate(&lenient).unwrap(), 0);
        let strict = TranslateArgs { path, strict: true };
        assert_eq!(run_translate(&strict).unwrap(), 1);
    }

    #[test]
    fn missing_file_is_an_operational_error() {
        let args = TranslateArgs {
            path: PathBuf::from("/nonexistent/assessment.json"),
            strict: false,
        };
        assert!(run_translate(&args).is_err());
    }
}
