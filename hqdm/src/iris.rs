//! Standard IRI constants: W3C vocabularies, XSD datatypes and the HQDM
//! relationship predicates used by the model builder.

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// HQDM namespace. Every [`EntityKind`](crate::EntityKind) IRI lives here.
pub const HQDM: &str = "https://hqdmtop.github.io/hqdm#";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:Ontology`.
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

// XSD datatypes
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:date`.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:dateTime`.
pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

// HQDM predicates
/// Human-readable name of an entity (`hqdm:data_EntityName`).
pub const ENTITY_NAME: &str = "https://hqdmtop.github.io/hqdm#data_EntityName";
/// Canonical class name seeded on every entity at creation.
pub const CLASS_NAME: &str = "https://hqdmtop.github.io/hqdm#data_ClassName";
/// `hqdm:has_superclass`.
pub const HAS_SUPERCLASS: &str = "https://hqdmtop.github.io/hqdm#has_superclass";
/// `hqdm:member_of`.
pub const MEMBER_OF: &str = "https://hqdmtop.github.io/hqdm#member_of";
/// `hqdm:member_of_kind`.
pub const MEMBER_OF_KIND: &str = "https://hqdmtop.github.io/hqdm#member_of_kind";
/// `hqdm:component_of`.
pub const COMPONENT_OF: &str = "https://hqdmtop.github.io/hqdm#component_of";
/// `hqdm:part_of`.
pub const PART_OF: &str = "https://hqdmtop.github.io/hqdm#part_of";
/// `hqdm:temporal_part_of`.
pub const TEMPORAL_PART_OF: &str = "https://hqdmtop.github.io/hqdm#temporal_part_of";
/// `hqdm:participant_in`.
pub const PARTICIPANT_IN: &str = "https://hqdmtop.github.io/hqdm#participant_in";
/// `hqdm:consists_of`.
pub const CONSISTS_OF: &str = "https://hqdmtop.github.io/hqdm#consists_of";
/// `hqdm:aggregated_into`.
pub const AGGREGATED_INTO: &str = "https://hqdmtop.github.io/hqdm#aggregated_into";
/// `hqdm:beginning`.
pub const BEGINNING: &str = "https://hqdmtop.github.io/hqdm#beginning";
/// `hqdm:ending`.
pub const ENDING: &str = "https://hqdmtop.github.io/hqdm#ending";
