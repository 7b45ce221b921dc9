//! End-to-end pipeline tests over temp-dir fixtures.

use std::path::Path;

use tempfile::TempDir;

use scorecard_cli::config::RunConfig;
use scorecard_cli::pipeline;
use scorecard_output::read_cache;
use scorecard_transform::PopulationFilter;

const DICTIONARY: &str = "\
NAME OF DATA ELEMENT,dev-category,API data type,VARIABLE NAME\n\
Unit ID,root,integer,UNITID\n\
Institution name,school,autocomplete,INSTNM\n\
Carnegie undergrad profile,school,integer,CCUGPROF\n\
Control,school,integer,CONTROL\n\
Currently operating,school,integer,CURROPER\n\
Distance only,school,integer,DISTANCEONLY\n\
Predominant degree,school,integer,PREDDEG\n\
Average SAT,admissions,float,SATAVG\n\
Obsolete field,school,float,OBSOLETE\n\
Median earnings,earnings,float,MD_EARN_WNE_P10\n";

const HEADER: &str =
    "UNITID,INSTNM,CCUGPROF,CONTROL,CURROPER,DISTANCEONLY,PREDDEG,SATAVG,OBSOLETE,MD_EARN_WNE_P10";

fn write_fixtures(dir: &Path) {
    std::fs::write(dir.join("CollegeScorecardDataDictionary.csv"), DICTIONARY).unwrap();

    // Rows 2 (for-profit) and 4 (not four-year) fall to the population
    // filter; OBSOLETE stays dense in this year.
    let year_one = format!(
        "{HEADER}\n\
         1,Alpha,10,1,1,0,3,1100,5,30000\n\
         2,Bravo,10,3,1,0,3,1050,6,31000\n\
         3,Charlie,10,2,1,0,3,PrivacySuppressed,7,32000\n\
         4,Delta,2,1,1,0,1,990,8,33000\n"
    );
    std::fs::write(dir.join("MERGED2015_16_PP.csv"), year_one).unwrap();

    // Row 7 is closed; OBSOLETE is fully suppressed among surviving rows,
    // making it sparse batch-wide.
    let year_two = format!(
        "{HEADER}\n\
         5,Echo,12,1,1,0,3,1000,PrivacySuppressed,30000\n\
         6,Foxtrot,12,1,1,0,3,1200,PrivacySuppressed,31000\n\
         7,Golf,12,1,0,0,3,1150,9,32000\n"
    );
    std::fs::write(dir.join("MERGED2016_17_PP.csv"), year_two).unwrap();
}

fn test_config() -> RunConfig {
    let mut config = RunConfig::scorecard(PopulationFilter::four_year_undergrad());
    config.source_files = vec![
        "MERGED2015_16_PP.csv".to_string(),
        "MERGED2016_17_PP.csv".to_string(),
    ];
    // Ten dictionary columns minus the earnings category.
    config.expected_width = Some(9);
    config.sparsity_threshold = 1;
    config
}

#[test]
fn test_run_produces_uniform_caches() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    let output = dir.path().join("output");

    let result = pipeline::run(dir.path(), &output, &test_config(), false).unwrap();

    assert_eq!(result.selected_width, 9);
    assert_eq!(result.sparse_dropped, 1); // obsolete
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].input_rows, 4);
    assert_eq!(result.files[0].kept_rows, 2);
    assert_eq!(result.files[1].kept_rows, 2);

    let first = read_cache(&output.join("MERGED2015_16_subset.parquet")).unwrap();
    let second = read_cache(&output.join("MERGED2016_17_subset.parquet")).unwrap();

    // One schema across the whole batch: the filter consumed preddeg,
    // curroper, and distanceonly; sparsity took obsolete everywhere.
    assert_eq!(first.get_column_names_str(), second.get_column_names_str());
    assert_eq!(
        first.get_column_names_str(),
        vec!["unitid", "instnm", "ccugprof", "control", "satavg"]
    );
    assert_eq!(result.final_width, 5);

    // The suppressed SATAVG cell survived as a null, not a string.
    assert_eq!(first.column("satavg").unwrap().null_count(), 1);
    assert_eq!(second.column("satavg").unwrap().null_count(), 0);

    // Population filter kept public/nonprofit four-year rows only.
    let ids: Vec<Option<i64>> = first
        .column("unitid")
        .unwrap()
        .i64()
        .unwrap()
        .iter()
        .collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    let output = dir.path().join("output");

    let result = pipeline::run(dir.path(), &output, &test_config(), true).unwrap();

    assert!(result.dry_run);
    assert!(result.files.iter().all(|f| f.cache_file.is_none()));
    assert!(!output.exists());
}

#[test]
fn test_dictionary_drift_aborts_run() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let mut config = test_config();
    config.expected_width = Some(290);

    let err = pipeline::run(dir.path(), dir.path(), &config, true).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("expected 290"), "unexpected error: {chain}");
}

#[test]
fn test_missing_source_column_aborts_run() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    // A source file without CONTROL cannot satisfy the kept-column set.
    std::fs::write(
        dir.path().join("MERGED2016_17_PP.csv"),
        "UNITID,INSTNM\n1,Alpha\n",
    )
    .unwrap();

    let err = pipeline::run(dir.path(), dir.path(), &test_config(), true).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("control"), "unexpected error: {chain}");
}

#[test]
fn test_bachelors_population_variant() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let mut config = test_config();
    config.population = PopulationFilter::predominantly_bachelors();

    let result = pipeline::run(dir.path(), dir.path(), &config, true).unwrap();

    // PREDDEG 3 rows survive (1, 2, 3 in year one), PREDDEG itself is
    // dropped as the discriminating column.
    assert_eq!(result.files[0].kept_rows, 3);
    assert_eq!(result.files[1].kept_rows, 3);
}
