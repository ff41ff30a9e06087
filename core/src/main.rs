//! Bloom & Grow demo runner
//!
//! Wires the in-memory stores together the way a UI shell would and walks
//! one season: setup, starter seeding, harvest logging, bouquet math and
//! sales tracking.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bloom_grow_core::services::harvest::NewHarvest;
use bloom_grow_core::services::{
    bouquet, sales, GardenSetupStore, HarvestLedger, OnboardingGate, PlantingSpaceRegistry,
    SalesLedger,
};
use bloom_grow_core::Config;
use shared::{
    standard_recipes, GardenSetup, GardenType, PaymentMethod, QualityGrade, SaleItemKind, Venue,
    POPULAR_FLOWERS,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloom_demo=info,bloom_grow_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Bloom & Grow demo");
    tracing::info!("Environment: {}", config.environment);

    let mut rng: StdRng = match config.demo.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // First run shows the welcome wizard, then never again
    let mut onboarding = OnboardingGate::new();
    if onboarding.should_show_wizard() {
        tracing::info!("first run, walking the welcome wizard");
        onboarding.complete();
    }

    // Garden setup
    let mut setup_store = GardenSetupStore::new();
    setup_store.set(GardenSetup {
        garden_type: GardenType::RaisedBeds,
        season_goal: "3000".to_string(),
        flower_types: POPULAR_FLOWERS
            .iter()
            .take(4)
            .map(|flower| flower.to_string())
            .collect(),
        container_specs: None,
    });

    // Starter spaces
    let mut registry = PlantingSpaceRegistry::new();
    registry.seed_from_setup(&setup_store.get(), &mut rng);
    for space in registry.list() {
        tracing::info!(
            name = %space.name,
            footprint = %space.footprint(),
            plants = space.plant_count(),
            "starter space"
        );
    }
    tracing::info!(
        bed_area_sqft = %registry.bed_area_sqft(),
        total_plants = registry.plant_count(),
        "planning summary"
    );
    let layout = serde_json::to_string_pretty(registry.list())?;
    tracing::debug!(spaces = %layout, "seeded layout");

    // A cutting session
    let mut harvests = HarvestLedger::new();
    let first_space = registry.list().first().map(|space| space.id);
    for (variety, stems, quality) in [
        ("Sunflower - Mammoth", 15, QualityGrade::Premium),
        ("Zinnia - State Fair Mix", 32, QualityGrade::Good),
        ("Cosmos - Sensation Mix", 18, QualityGrade::Good),
        ("Zinnia - State Fair Mix", 12, QualityGrade::Fair),
    ] {
        harvests.append(NewHarvest {
            variety: variety.to_string(),
            stem_count: stems,
            quality,
            space_id: first_space,
            notes: None,
            date: None,
        })?;
    }
    tracing::info!(
        total_stems = harvests.total_stems(),
        premium_stems = harvests.premium_stems(),
        estimated_value = %harvests.estimated_value(),
        "harvest summary"
    );

    // Bouquet math against the current ledger
    let available = harvests.totals_by_variety();
    for recipe in standard_recipes() {
        let count = bouquet::max_bouquets(&recipe, &available);
        let value = bouquet::yield_value(&recipe, count);
        tracing::info!(
            recipe = %recipe.name,
            bouquets = count,
            retail = %value.retail,
            wholesale = %value.wholesale,
            "bouquet yield"
        );
    }

    // Sales
    let mut ledger = SalesLedger::new();
    ledger.record(sales::NewSale {
        customer: "Sarah Johnson".to_string(),
        venue: Venue::FarmersMarket,
        payment_method: PaymentMethod::Cash,
        items: vec![sales::NewSaleItem {
            kind: SaleItemKind::Bouquet,
            description: "Summer Sunshine".to_string(),
            quantity: 2,
            unit_price: Decimal::from(15),
        }],
        date: None,
    })?;
    ledger.record(sales::NewSale {
        customer: "Downtown Florist".to_string(),
        venue: Venue::Florist,
        payment_method: PaymentMethod::Check,
        items: vec![sales::NewSaleItem {
            kind: SaleItemKind::Stems,
            description: "Sunflower - Mammoth".to_string(),
            quantity: 24,
            unit_price: Decimal::new(15, 1),
        }],
        date: None,
    })?;

    let revenue = sales::total_revenue(ledger.list());
    tracing::info!(
        revenue = %revenue,
        average = %sales::average_sale(ledger.list()),
        progress = %sales::season_progress(setup_store.season_goal_amount(), revenue),
        "sales summary"
    );
    if let Some((venue, venue_revenue)) = sales::top_venue(ledger.list()) {
        tracing::info!(venue = %venue, revenue = %venue_revenue, "top venue");
    }
    for row in sales::venue_breakdown(ledger.list()) {
        tracing::info!(
            venue = %row.venue,
            revenue = %row.revenue,
            sales = row.sale_count,
            "venue breakdown"
        );
    }

    println!("{}", sales::export_csv(ledger.list())?);

    Ok(())
}
