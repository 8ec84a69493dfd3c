//! Extra Life API endpoints
//!
//! | Method | Path |
//! |---|---|
//! | `participants`, `all_participants` | `participants` |
//! | `participant` | `participants/{id}` |
//! | `participant_donations`, `all_participant_donations` | `participants/{id}/donations` |
//! | `participant_donors`, `all_participant_donors` | `participants/{id}/donors` |
//! | `donor` | `donors/{id}` |
//! | `all_participant_activities` | `participants/{id}/activity` |

mod client;

pub use client::ExtraLifeClient;
