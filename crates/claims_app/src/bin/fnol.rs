//! FNOL demo binary
//!
//! Reports an AUTO incident, opens a claim for it, uploads one attachment and
//! submits the claim through the AUTO channel, all against in-memory adapters.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin fnol-demo
//!
//! FNOL_LOG_LEVEL=debug FNOL_JSON_LOGS=true cargo run --bin fnol-demo
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! * `FNOL_JSON_LOGS` - Emit JSON log lines (default: false)
//! * `FNOL_POLICY_NUMBER_PREFIX` - Prefix for resolved policy numbers (default: PN-)
//! * `FNOL_DEFAULT_ACTOR` - Actor reporting and submitting the claim (default: fnol-demo)

use anyhow::Context;
use chrono::{Duration, Utc};

use claims_app::{init_tracing, AppConfig, InMemoryClaimsModule};
use domain_claims::{
    ClaimBuilder, ClaimRepository, IncidentBuilder, SubmissionChannel, AUTO_CHANNEL,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("loading configuration")?;
    init_tracing(&config)?;

    tracing::info!(actor = %config.default_actor, "Starting FNOL demo");

    let module = InMemoryClaimsModule::new(&config);

    let incident = IncidentBuilder::auto()
        .occurred_at(Utc::now() - Duration::hours(2))
        .location("Warsaw")?
        .description("Rear-end collision at a traffic light")?
        .for_auto()?
        .vin("WVWZZZ1JZXW000001")?
        .license_plate("WI1234A")?
        .build()?;

    let claim = ClaimBuilder::fnol_with_clock(module.clock())
        .policy_id("POL-1")?
        .incident(incident)
        .created_by(config.default_actor.as_str())?
        .channel(AUTO_CHANNEL)?
        .build()?;
    module.claims().save(&claim)?;
    module.attachments().put(claim.claim_id().clone(), ["att-photo-1"])?;

    tracing::info!(claim_id = %claim.claim_id(), status = %claim.status(), "Claim registered");

    let result = module.submit_claim_use_case().submit(
        claim.claim_id(),
        SubmissionChannel::Auto,
        &config.default_actor,
        true,
    )?;

    tracing::info!(
        submission_id = %result.submission.submission_id(),
        status = %result.updated_claim.status(),
        "Claim submitted"
    );

    let event = serde_json::to_string_pretty(&result.event).context("serializing event")?;
    println!("{event}");

    Ok(())
}
