//! Tests for the afterglow functions and the Model type

// Numeric behaviour of the afterglow shapes
mod afterglow_tests;

// Model construction and evaluation
mod model_tests;
