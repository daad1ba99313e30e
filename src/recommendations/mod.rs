//! Recommendation ranking for documented systems
//!
//! ## Architecture
//! - `types.rs` - Recommendation, Priority, ordering helpers
//! - `costs.rs` - CostTable (national base costs, regional multipliers, savings)
//! - `why_text.rs` - Titles and plain-language justification
//! - `ranker.rs` - generate_recommendations
//! - `demo.rs` - Canned personas run through the same ranker
//! - `source.rs` - RecommendationSource (real vs demo data)

pub mod types;
pub mod costs;
pub mod why_text;
pub mod ranker;
pub mod demo;
pub mod source;

pub use types::{
    compare_recommendations, is_ranked, sort_recommendations, top_n, Priority, Recommendation,
    RecommendationOutcome, RecommendationRecord,
};
pub use costs::{CostEstimate, CostTable};
pub use ranker::{classify_priority, generate_recommendations, urgency_score};
pub use demo::{generate_demo_recommendations, Persona, DEMO_YEAR};
pub use source::{DemoDataSource, RealDataSource, RecommendationSource};
