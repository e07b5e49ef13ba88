//! Training infrastructure for byte-level BPE.
//!
//! This module provides the training loop and its configuration.

pub mod trainer;

pub use trainer::{
    select_best_pair, train, BpeTrainer, MergeStep, TrainingConfig, TrainingOutput,
    TrainingReport,
};
