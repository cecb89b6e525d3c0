use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use accession_ingest::{
    load_accession_list, load_assigned_accession_list, load_field_mappings, load_fixed_values,
    load_metadata_accession_list, load_template,
};
use accession_model::CollectionConfig;
use accession_output::{write_accession_list, write_box_sheets, write_metadata_sheets};
use accession_transform::{
    assign_local_identifiers, boxes_to_process, build_metadata_sheets, place_normalize,
    split_by_box,
};

use crate::cli::{AssignIdsArgs, BoxSheetsArgs, Command, MetadataArgs, PlacesArgs};
use crate::types::{
    AssignIdsResult, BoxSheetsResult, CommandOutcome, MetadataResult, PlaceResult, SheetSummary,
};

/// Loads collection settings, falling back to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<CollectionConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str::<CollectionConfig>(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => CollectionConfig::default(),
    };
    config.validate().context("invalid collection config")?;
    Ok(config)
}

pub fn run_command(command: &Command, config: &CollectionConfig) -> Result<CommandOutcome> {
    Ok(match command {
        Command::AssignIds(args) => CommandOutcome::AssignIds(run_assign_ids(args, config)?),
        Command::BoxSheets(args) => CommandOutcome::BoxSheets(run_box_sheets(args, config)?),
        Command::Metadata(args) => CommandOutcome::Metadata(run_metadata(args, config)?),
        Command::Places(args) => CommandOutcome::Place(run_places(args)),
    })
}

pub fn run_assign_ids(args: &AssignIdsArgs, config: &CollectionConfig) -> Result<AssignIdsResult> {
    let span = info_span!("assign_ids", input = %args.input.display());
    let _guard = span.enter();

    let accessions = load_accession_list(&args.input).context("load accession list")?;
    let assigned = assign_local_identifiers(&accessions, config).context("assign identifiers")?;
    let output =
        write_accession_list(&assigned.frame, &args.output).context("write accession list")?;

    Ok(AssignIdsResult {
        input: args.input.clone(),
        output,
        summary: assigned.summary,
    })
}

pub fn run_box_sheets(args: &BoxSheetsArgs, config: &CollectionConfig) -> Result<BoxSheetsResult> {
    let span = info_span!("box_sheets", input = %args.input.display());
    let _guard = span.enter();

    let accessions =
        load_assigned_accession_list(&args.input).context("load accession list")?;
    let split = split_by_box(&accessions, config).context("split by box")?;
    let paths = write_box_sheets(&split.sheets, &args.output_dir, config)
        .context("write box worksheets")?;

    let sheets = split
        .sheets
        .iter()
        .zip(paths)
        .map(|(sheet, path)| SheetSummary {
            box_number: sheet.box_number,
            rows: sheet.rows(),
            path,
        })
        .collect();

    Ok(BoxSheetsResult {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        sheets,
        negatives: split.negatives,
        out_of_range: split.out_of_range,
    })
}

pub fn run_metadata(args: &MetadataArgs, config: &CollectionConfig) -> Result<MetadataResult> {
    let span = info_span!("metadata", input = %args.input.display());
    let _guard = span.enter();

    let mappings = load_field_mappings(&args.mapping).context("load field mappings")?;
    let fixed_values = load_fixed_values(&args.fixed_values).context("load fixed values")?;
    let template = load_template(&args.template).context("load spreadsheet template")?;
    info!(
        mappings = mappings.len(),
        fixed_values = fixed_values.len(),
        columns = template.len(),
        "loaded mapping workbook"
    );

    let accessions =
        load_metadata_accession_list(&args.input).context("load accession list")?;
    let boxes = boxes_to_process(config, args.box_number);
    let built = build_metadata_sheets(&accessions, &mappings, &fixed_values, &template, boxes)
        .context("build metadata sheets")?;
    let paths = write_metadata_sheets(&built, &args.output_dir, config)
        .context("write metadata sheets")?;

    let sheets = built
        .iter()
        .zip(paths)
        .map(|(sheet, path)| SheetSummary {
            box_number: sheet.box_number,
            rows: sheet.rows(),
            path,
        })
        .collect();

    Ok(MetadataResult {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        mappings: mappings.len(),
        fixed_values: fixed_values.len(),
        template_columns: template.len(),
        sheets,
    })
}

pub fn run_places(args: &PlacesArgs) -> PlaceResult {
    PlaceResult {
        city: args.city.clone(),
        state: args.state.clone(),
        country: args.country.clone(),
        heading: place_normalize(&args.city, &args.state, &args.country),
    }
}

