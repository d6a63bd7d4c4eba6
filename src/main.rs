use std::path::Path;

use eframe::egui;
use titanic_eda::app::TitanicEdaApp;
use titanic_eda::data::loader::{self, LoadError};
use titanic_eda::stats::{corr, describe, group, impute};
use titanic_eda::{charts, report};

fn main() -> eframe::Result {
    env_logger::init();

    // ---- Loader ----
    let mut table = match loader::load_table(Path::new(loader::DATASET_FILE)) {
        Ok(table) => table,
        Err(LoadError::NotFound) => {
            println!("{}", report::MISSING_FILE_DIAGNOSTIC);
            std::process::exit(1);
        }
        Err(LoadError::Malformed(e)) => {
            log::error!("failed to read {}: {e:#}", loader::DATASET_FILE);
            std::process::exit(1);
        }
    };
    println!("Dataset loaded successfully.");
    log::info!(
        "loaded {} rows, {} columns from {}",
        table.len(),
        table.columns.len(),
        loader::DATASET_FILE
    );

    // ---- Profiler ----
    println!("\n--- Descriptive Statistics ---");
    report::print_describe(&describe::describe(&table));

    println!("\n--- Information about the DataFrame ---");
    report::print_info(&table, &describe::info(&table));

    println!("\n--- Missing Values ---");
    report::print_missing(&describe::missing_counts(&table));

    // ---- Imputer (for visualization purposes) ----
    impute::fill_median(&mut table, "Age");
    impute::fill_mode(&mut table, "Embarked");

    println!("\n--- Missing Values After Imputation (for visualization) ---");
    report::print_missing(&describe::missing_counts(&table));

    // ---- Feature lists ----
    let numeric_all = table.numeric_columns();
    println!("\nNumeric features identified: {numeric_all:?}");
    let numeric_features = table.numeric_features();

    println!("\n--- Histograms for Numeric Features ---");
    println!("\n--- Boxplots for Numeric Features ---");

    let categorical_features = table.categorical_features();
    println!("\nCategorical features identified: {categorical_features:?}");

    println!("\n--- Count Plots for Categorical Features ---");

    // ---- Relationships ----
    println!("\n--- Correlation Matrix (Numeric Features) ---");
    let correlation = corr::correlation_matrix(&table, &numeric_features);
    report::print_corr(&correlation);

    println!("\n--- Pairplot for a subset of Numeric Features (Age, Fare, Survived) ---");

    // ---- Group aggregates ----
    println!("\n--- Survival Rate by Sex ---");
    let by_sex = group::survival_rate_by(&table, "Sex");
    report::print_grouped(&by_sex);

    println!("\n--- Survival Rate by Pclass ---");
    let by_pclass = group::survival_rate_by(&table, "Pclass");
    report::print_grouped(&by_pclass);

    // ---- Narrator ----
    println!("\n--- Inferences from EDA ---");
    report::print_inferences();

    println!("\n--- Interactive Scatter Plot: Age vs Fare by Survived ---");

    // ---- Chart viewer ----
    let sequence = charts::build_sequence(
        &table,
        &numeric_features,
        &categorical_features,
        &correlation,
        &by_sex,
        &by_pclass,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Titanic EDA – Chart Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(TitanicEdaApp::new(sequence)))),
    )
}
