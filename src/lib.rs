pub mod analysis; // rolling stats, fertile window, thermal shift, symptom ranking
pub mod config;
pub mod cycle_log; // monthly cycle-length log summary
pub mod models;
pub mod notes; // line normalizer + tolerant field extractors
pub mod source; // notes-file collaborator boundary
pub mod vocab; // substitutable keyword vocabularies
