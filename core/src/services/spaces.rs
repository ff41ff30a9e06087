//! Planting space registry and starter-space seeding

use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    flower_color, validate_name, ContainerShape, ContainerSpecs, Dimensions, FlowerAssignment,
    GardenSetup, GardenType, PlantingSpace, RawDimensions, SpaceKind,
};

use crate::error::{AppError, AppResult};

/// Number of starter spaces generated from a fresh setup
const STARTER_SPACE_COUNT: usize = 2;

/// Starter bed footprint in feet, matching the demo layout
const STARTER_BED_LENGTH_FT: u32 = 8;
const STARTER_BED_WIDTH_FT: u32 = 4;

/// Input for creating a space. The caller supplies a fresh id; reusing one
/// is rejected rather than silently overwriting.
#[derive(Debug, Clone)]
pub struct NewSpace {
    pub id: Uuid,
    pub name: String,
    pub kind: SpaceKind,
    pub container_shape: Option<ContainerShape>,
    pub dimensions: RawDimensions,
    pub flowers: Vec<FlowerAssignment>,
}

/// Input for patching a space
#[derive(Debug, Clone, Default)]
pub struct SpaceUpdate {
    pub name: Option<String>,
    pub dimensions: Option<RawDimensions>,
    pub flowers: Option<Vec<FlowerAssignment>>,
}

/// Ordered collection of the user's beds and containers
#[derive(Debug, Default)]
pub struct PlantingSpaceRegistry {
    spaces: Vec<PlantingSpace>,
}

impl PlantingSpaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces in creation order
    pub fn list(&self) -> &[PlantingSpace] {
        &self.spaces
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&PlantingSpace> {
        self.spaces.iter().find(|space| space.id == id)
    }

    /// Total plants planned across all spaces
    pub fn plant_count(&self) -> u64 {
        self.spaces.iter().map(PlantingSpace::plant_count).sum()
    }

    /// Combined bed area in square feet; container capacity is not an area
    /// and does not contribute
    pub fn bed_area_sqft(&self) -> Decimal {
        self.spaces
            .iter()
            .filter_map(|space| match space.footprint() {
                shared::Footprint::AreaSqFt(area) => Some(area),
                shared::Footprint::VolumeGal(_) => None,
            })
            .sum()
    }

    /// One-shot starter generation from the garden setup. A non-empty
    /// registry is left untouched; the composition root calls this once at
    /// startup rather than guarding from a render path.
    ///
    /// Selected flowers are dealt round-robin across the starter spaces.
    /// A space the deal leaves empty receives the first two flowers of the
    /// full selection instead, so no starter space is ever flowerless.
    pub fn seed_from_setup<R: Rng>(
        &mut self,
        setup: &GardenSetup,
        rng: &mut R,
    ) -> &[PlantingSpace] {
        if !self.spaces.is_empty() {
            return &self.spaces;
        }

        let is_container = setup.garden_type == GardenType::Container;
        let specs = setup.container_specs.clone().unwrap_or_default();

        for index in 0..STARTER_SPACE_COUNT {
            let mut flowers: Vec<FlowerAssignment> = setup
                .flower_types
                .iter()
                .skip(index)
                .step_by(STARTER_SPACE_COUNT)
                .map(|name| starter_assignment(name, is_container, rng))
                .collect();
            if flowers.is_empty() {
                flowers = setup
                    .flower_types
                    .iter()
                    .take(2)
                    .map(|name| starter_assignment(name, is_container, rng))
                    .collect();
            }

            let space = if is_container {
                PlantingSpace {
                    id: Uuid::new_v4(),
                    name: format!("Container {}", index + 1),
                    kind: SpaceKind::Container,
                    container_shape: Some(specs.shape),
                    dimensions: container_dimensions(&specs),
                    flowers,
                }
            } else {
                PlantingSpace {
                    id: Uuid::new_v4(),
                    name: format!("Bed {}", index + 1),
                    kind: SpaceKind::Bed,
                    container_shape: None,
                    dimensions: Dimensions::Bed {
                        length_ft: Decimal::from(STARTER_BED_LENGTH_FT),
                        width_ft: Decimal::from(STARTER_BED_WIDTH_FT),
                    },
                    flowers,
                }
            };
            self.spaces.push(space);
        }

        tracing::info!(
            spaces = self.spaces.len(),
            container = is_container,
            "seeded starter spaces from setup"
        );
        &self.spaces
    }

    /// Append a caller-constructed space
    pub fn add(&mut self, input: NewSpace) -> AppResult<PlantingSpace> {
        validate_name(&input.name).map_err(|msg| AppError::validation("name", msg))?;
        if self.spaces.iter().any(|space| space.id == input.id) {
            return Err(AppError::DuplicateEntry(format!(
                "planting space {}",
                input.id
            )));
        }
        let dimensions = Dimensions::from_raw(input.kind, input.container_shape, &input.dimensions)?;
        let space = PlantingSpace {
            id: input.id,
            name: input.name,
            kind: input.kind,
            container_shape: match input.kind {
                SpaceKind::Container => {
                    Some(input.container_shape.unwrap_or(ContainerShape::Rectangular))
                }
                SpaceKind::Bed => None,
            },
            dimensions,
            flowers: input.flowers,
        };
        tracing::info!(id = %space.id, name = %space.name, "added planting space");
        self.spaces.push(space.clone());
        Ok(space)
    }

    /// Patch an existing space. New dimensions are interpreted against the
    /// space's existing kind and shape.
    pub fn update(&mut self, id: Uuid, patch: SpaceUpdate) -> AppResult<PlantingSpace> {
        let space = self
            .spaces
            .iter_mut()
            .find(|space| space.id == id)
            .ok_or_else(|| AppError::NotFound("Planting space".to_string()))?;

        if let Some(name) = patch.name {
            validate_name(&name).map_err(|msg| AppError::validation("name", msg))?;
            space.name = name;
        }
        if let Some(raw) = patch.dimensions {
            space.dimensions = Dimensions::from_raw(space.kind, space.container_shape, &raw)?;
        }
        if let Some(flowers) = patch.flowers {
            space.flowers = flowers;
        }
        Ok(space.clone())
    }
}

/// Starter dimensions for a container space, falling back to the default
/// planter measurements where setup left gaps
fn container_dimensions(specs: &ContainerSpecs) -> Dimensions {
    match specs.shape {
        ContainerShape::Round => Dimensions::RoundContainer {
            diameter_in: specs.diameter_in.unwrap_or_else(|| Decimal::from(12)),
            height_in: specs.height_in.unwrap_or_else(|| Decimal::from(10)),
        },
        ContainerShape::Rectangular | ContainerShape::Square => Dimensions::RectContainer {
            length_in: specs.length_in.unwrap_or_else(|| Decimal::from(18)),
            width_in: specs.width_in.unwrap_or_else(|| Decimal::from(12)),
            height_in: specs.height_in.unwrap_or_else(|| Decimal::from(10)),
        },
    }
}

/// One starter flower assignment with a plausible plant count for the
/// space kind: 2-7 plants in a container, 8-27 in a bed
fn starter_assignment<R: Rng>(name: &str, is_container: bool, rng: &mut R) -> FlowerAssignment {
    let quantity = if is_container {
        rng.gen_range(2..=7)
    } else {
        rng.gen_range(8..=27)
    };
    FlowerAssignment {
        name: name.to_string(),
        variety: None,
        color: flower_color(name).to_string(),
        quantity,
    }
}
