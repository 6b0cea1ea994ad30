//! Fixture entities run through the encoder by the triples validator.
//!
//! Each fixture exercises one literal rule or one modelling pattern:
//!
//! | Fixture | Covers |
//! |---------|--------|
//! | `seeded_person` | factory seeding only |
//! | `multi_kind_person` | several `rdf:type` references plus names |
//! | `dated_event` | date and dateTime detection |
//! | `measured_object` | integer and real literals |
//! | `string_typed_kind` | `rdf:type` stored as a string |
//! | `organization_model` | builder relationships |

use hqdm::{create_entity, create_with_kinds, iris, Entity, EntityKind, Identifier, ModelBuilder};

/// A named fixture entity.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Fixture name used in report messages.
    pub name: String,
    /// The entity to encode.
    pub entity: Entity,
}

impl Fixture {
    fn new(name: impl Into<String>, entity: Entity) -> Self {
        Self {
            name: name.into(),
            entity,
        }
    }
}

const BASE: &str = "http://example.org/o#";

fn id(resource: &str) -> hqdm::Result<Identifier> {
    Identifier::new(format!("{BASE}{resource}"))
}

/// Builds every fixture.
///
/// # Errors
///
/// Returns an error if a fixture identifier or kind name is rejected, which
/// is itself a conformance failure.
pub fn all() -> hqdm::Result<Vec<Fixture>> {
    let mut fixtures = vec![
        Fixture::new("seeded_person", create_entity("person", id("person0")?)?),
        Fixture::new("multi_kind_person", multi_kind_person()?),
        Fixture::new("dated_event", dated_event()?),
        Fixture::new("measured_object", measured_object()?),
        Fixture::new("string_typed_kind", string_typed_kind()?),
    ];
    for entity in organization_model()? {
        fixtures.push(Fixture::new(
            format!("organization_model/{}", entity.kind()),
            entity,
        ));
    }
    Ok(fixtures)
}

/// `person1`: person and participant, named, with a string `member_of_kind`.
///
/// # Errors
///
/// Returns an error if the identifier is rejected.
pub fn multi_kind_person() -> hqdm::Result<Entity> {
    let mut e = create_with_kinds(&[EntityKind::Person, EntityKind::Participant], id("person1")?)?;
    e.add_string(iris::ENTITY_NAME, "person1");
    e.add_string(iris::MEMBER_OF_KIND, "PERSON_KIND");
    Ok(e)
}

fn dated_event() -> hqdm::Result<Entity> {
    let mut e = create_entity("point_in_time", id("launch")?)?;
    e.add_string(iris::ENTITY_NAME, "2024-01-15");
    e.add_string(format!("{BASE}recorded_at"), "2024-01-15T10:30:00Z");
    e.add_reference(format!("{BASE}same_day_as"), id("2024-01-15")?);
    Ok(e)
}

fn measured_object() -> hqdm::Result<Entity> {
    let mut e = create_entity("physical_object", id("pump")?)?;
    e.add_integer(format!("{BASE}serial"), 1042);
    e.add_real(format!("{BASE}mass_kg"), 12.5);
    e.add_real(format!("{BASE}length_m"), 2.0);
    Ok(e)
}

fn string_typed_kind() -> hqdm::Result<Entity> {
    let mut e = create_entity("person", id("imported")?)?;
    e.add_string(iris::RDF_TYPE, format!("{BASE}participant"));
    Ok(e)
}

fn organization_model() -> hqdm::Result<Vec<Entity>> {
    let mut model = ModelBuilder::default();
    let acme = model.create("organization", "acme")?;
    let sales = model.create("organization_component", "sales")?;
    let alice = model.create("person", "alice")?;
    let meeting = model.create("activity", "kickoff")?;
    let role = model.create("participant", "alice_in_kickoff")?;
    model
        .component_of(&sales, &acme)?
        .temporal_part_of(&role, &alice)?
        .participant_in(&role, &meeting)?
        .consists_of(&meeting, &role)?;
    Ok(model.into_entities())
}
