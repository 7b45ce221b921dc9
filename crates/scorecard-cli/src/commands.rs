use anyhow::{Context, Result};
use comfy_table::Table;

use scorecard_ingest::{load_dictionary, select_columns};
use scorecard_transform::PopulationFilter;

use crate::cli::{ColumnsArgs, PopulationArg, RunArgs};
use crate::config::{EXCLUDED_CATEGORIES, RunConfig};
use crate::pipeline;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let population = match args.population {
        PopulationArg::FourYear => PopulationFilter::four_year_undergrad(),
        PopulationArg::Bachelors => PopulationFilter::predominantly_bachelors(),
    };
    let config = RunConfig::scorecard(population);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_dir.clone());
    pipeline::run(&args.data_dir, &output_dir, &config, args.dry_run)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary).context("load data dictionary")?;
    let columns = select_columns(&dictionary, &EXCLUDED_CATEGORIES);

    let mut table = Table::new();
    table.set_header(vec!["Column", "Category", "Declared type"]);
    apply_table_style(&mut table);
    for name in columns.iter() {
        let descriptor = dictionary.get(name);
        table.add_row(vec![
            name.to_string(),
            descriptor
                .and_then(|d| d.category.clone())
                .unwrap_or_default(),
            descriptor
                .map(|d| format!("{:?}", d.declared_type).to_lowercase())
                .unwrap_or_default(),
        ]);
    }
    println!("{table}");
    println!("{} of {} columns kept", columns.len(), dictionary.len());
    Ok(())
}
