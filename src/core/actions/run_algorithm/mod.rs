pub mod run_algorithm;
