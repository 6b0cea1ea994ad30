//! The closed HQDM entity kind vocabulary.
//!
//! Each row of the table below declares one kind: its Rust variant, its HQDM
//! local name, and the kinds it specializes. Parents are documentation-only
//! data; nothing in this crate dispatches on them. They are consulted by
//! [`KindRegistry::ancestors`](crate::KindRegistry::ancestors) for
//! introspection and by the vocabulary serializers.

use std::fmt;

use crate::iris;

macro_rules! entity_kinds {
    ($( $variant:ident => $name:literal, [$($parent:ident),*]; )*) => {
        /// One kind (class) of the HQDM ontology.
        ///
        /// Every [`Entity`](crate::Entity) carries at least one kind tag,
        /// assigned at creation and never removed.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum EntityKind {
            $( $variant, )*
        }

        impl EntityKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [EntityKind] = &[ $( EntityKind::$variant, )* ];

            /// HQDM local name, e.g. `class_of_functional_system`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( EntityKind::$variant => $name, )*
                }
            }

            /// Canonical class name, e.g. `ClassOfFunctionalSystem`.
            #[must_use]
            pub const fn class_name(self) -> &'static str {
                match self {
                    $( EntityKind::$variant => stringify!($variant), )*
                }
            }

            /// Full IRI of the kind in the HQDM namespace.
            #[must_use]
            pub const fn iri(self) -> &'static str {
                match self {
                    $( EntityKind::$variant => concat!("https://hqdmtop.github.io/hqdm#", $name), )*
                }
            }

            /// Declared supertypes.
            #[must_use]
            pub const fn parents(self) -> &'static [EntityKind] {
                match self {
                    $( EntityKind::$variant => &[ $( EntityKind::$parent, )* ], )*
                }
            }
        }
    };
}

entity_kinds! {
    Thing => "thing", [];
    AbstractObject => "abstract_object", [Thing];
    Class => "class", [AbstractObject];
    ClassOfAbstractObject => "class_of_abstract_object", [Class];
    ClassOfClass => "class_of_class", [ClassOfAbstractObject];
    ClassOfClassOfSpatioTemporalExtent => "class_of_class_of_spatio_temporal_extent", [ClassOfClass];
    ClassOfRelationship => "class_of_relationship", [ClassOfAbstractObject];
    ClassOfSpatioTemporalExtent => "class_of_spatio_temporal_extent", [Class];
    EnumeratedClass => "enumerated_class", [Class];
    Relationship => "relationship", [AbstractObject];
    Classification => "classification", [Relationship];
    Specialization => "specialization", [Relationship];
    Aggregation => "aggregation", [Relationship];
    Composition => "composition", [Aggregation];
    TemporalComposition => "temporal_composition", [Composition];
    Function => "function_", [Relationship];
    DefinedRelationship => "defined_relationship", [Relationship];
    KindOfRelationshipWithRestriction => "kind_of_relationship_with_restriction", [ClassOfRelationship];
    KindOfRelationshipWithSignature => "kind_of_relationship_with_signature", [ClassOfRelationship];
    Scale => "scale", [Function];
    UnitOfMeasure => "unit_of_measure", [Function];
    SpatioTemporalExtent => "spatio_temporal_extent", [Thing];
    Event => "event", [SpatioTemporalExtent];
    PointInTime => "point_in_time", [Event];
    State => "state", [SpatioTemporalExtent];
    Individual => "individual", [State];
    PeriodOfTime => "period_of_time", [State];
    PossibleWorld => "possible_world", [Individual, PeriodOfTime];
    Plan => "plan", [PossibleWorld];
    Requirement => "requirement", [SpatioTemporalExtent];
    ParticipantInActivityOrAssociation => "participant_in_activity_or_association", [Thing];
    StateOfPhysicalObject => "state_of_physical_object", [State];
    PhysicalObject => "physical_object", [Individual, StateOfPhysicalObject];
    StateOfOrdinaryPhysicalObject => "state_of_ordinary_physical_object", [StateOfPhysicalObject];
    OrdinaryPhysicalObject => "ordinary_physical_object", [PhysicalObject, StateOfOrdinaryPhysicalObject];
    StateOfBiologicalObject => "state_of_biological_object", [StateOfPhysicalObject];
    BiologicalObject => "biological_object", [PhysicalObject, StateOfBiologicalObject];
    StateOfOrdinaryBiologicalObject => "state_of_ordinary_biological_object", [StateOfBiologicalObject, StateOfOrdinaryPhysicalObject];
    OrdinaryBiologicalObject => "ordinary_biological_object", [BiologicalObject, OrdinaryPhysicalObject, StateOfOrdinaryBiologicalObject];
    StateOfIntentionallyConstructedObject => "state_of_intentionally_constructed_object", [State];
    IntentionallyConstructedObject => "intentionally_constructed_object", [Individual, StateOfIntentionallyConstructedObject];
    StateOfFunctionalObject => "state_of_functional_object", [StateOfIntentionallyConstructedObject, StateOfPhysicalObject];
    FunctionalObject => "functional_object", [IntentionallyConstructedObject, PhysicalObject, StateOfFunctionalObject];
    StateOfOrdinaryFunctionalObject => "state_of_ordinary_functional_object", [StateOfFunctionalObject, StateOfOrdinaryPhysicalObject];
    OrdinaryFunctionalObject => "ordinary_functional_object", [FunctionalObject, OrdinaryPhysicalObject, StateOfOrdinaryFunctionalObject];
    StateOfSystem => "state_of_system", [StateOfOrdinaryPhysicalObject];
    System => "system", [OrdinaryPhysicalObject, StateOfSystem];
    StateOfSystemComponent => "state_of_system_component", [StateOfPhysicalObject];
    SystemComponent => "system_component", [PhysicalObject, StateOfSystemComponent];
    StateOfBiologicalSystem => "state_of_biological_system", [StateOfOrdinaryBiologicalObject, StateOfSystem];
    BiologicalSystem => "biological_system", [OrdinaryBiologicalObject, System, StateOfBiologicalSystem];
    StateOfBiologicalSystemComponent => "state_of_biological_system_component", [StateOfBiologicalObject, StateOfSystemComponent];
    BiologicalSystemComponent => "biological_system_component", [BiologicalObject, SystemComponent, StateOfBiologicalSystemComponent];
    StateOfFunctionalSystem => "state_of_functional_system", [StateOfOrdinaryFunctionalObject, StateOfSystem];
    FunctionalSystem => "functional_system", [OrdinaryFunctionalObject, System, StateOfFunctionalSystem];
    StateOfFunctionalSystemComponent => "state_of_functional_system_component", [StateOfFunctionalObject, StateOfSystemComponent];
    FunctionalSystemComponent => "functional_system_component", [FunctionalObject, SystemComponent, StateOfFunctionalSystemComponent];
    InstalledObject => "installed_object", [StateOfOrdinaryPhysicalObject, StateOfSystemComponent];
    InstalledFunctionalSystemComponent => "installed_functional_system_component", [InstalledObject, StateOfFunctionalSystemComponent];
    InPlaceBiologicalComponent => "in_place_biological_component", [InstalledObject, StateOfBiologicalSystemComponent, StateOfOrdinaryBiologicalObject];
    StateOfSociallyConstructedObject => "state_of_socially_constructed_object", [StateOfIntentionallyConstructedObject];
    SociallyConstructedObject => "socially_constructed_object", [IntentionallyConstructedObject, StateOfSociallyConstructedObject];
    StateOfParty => "state_of_party", [StateOfSystem];
    Party => "party", [System, StateOfParty];
    StateOfPerson => "state_of_person", [StateOfBiologicalSystem, StateOfParty];
    Person => "person", [BiologicalSystem, Party, StateOfPerson];
    StateOfOrganization => "state_of_organization", [StateOfParty, StateOfSociallyConstructedObject];
    Organization => "organization", [Party, SociallyConstructedObject, StateOfOrganization];
    StateOfOrganizationComponent => "state_of_organization_component", [StateOfSystemComponent, StateOfSociallyConstructedObject];
    OrganizationComponent => "organization_component", [SystemComponent, SociallyConstructedObject, StateOfOrganizationComponent];
    StateOfPosition => "state_of_position", [StateOfOrganizationComponent];
    Position => "position", [OrganizationComponent, StateOfPosition];
    PersonInPosition => "person_in_position", [InstalledObject, StateOfPerson, StateOfPosition];
    StateOfLanguageCommunity => "state_of_language_community", [StateOfOrganization];
    LanguageCommunity => "language_community", [Organization, StateOfLanguageCommunity];
    StateOfSign => "state_of_sign", [StateOfSociallyConstructedObject];
    Sign => "sign", [SociallyConstructedObject, StateOfSign];
    StateOfActivity => "state_of_activity", [State];
    Activity => "activity", [Individual, StateOfActivity];
    StateOfAssociation => "state_of_association", [State];
    Association => "association", [Individual, StateOfAssociation];
    StateOfSociallyConstructedActivity => "state_of_socially_constructed_activity", [StateOfActivity, StateOfSociallyConstructedObject];
    SociallyConstructedActivity => "socially_constructed_activity", [Activity, SociallyConstructedObject, StateOfSociallyConstructedActivity];
    StateOfAmountOfMoney => "state_of_amount_of_money", [StateOfPhysicalObject, StateOfSociallyConstructedObject];
    AmountOfMoney => "amount_of_money", [PhysicalObject, SociallyConstructedObject, StateOfAmountOfMoney];
    StateOfSalesProductInstance => "state_of_sales_product_instance", [StateOfOrdinaryFunctionalObject];
    SalesProductInstance => "sales_product_instance", [OrdinaryFunctionalObject, StateOfSalesProductInstance];
    Participant => "participant", [StateOfPhysicalObject];
    Employee => "employee", [Participant, StateOfPerson];
    Employer => "employer", [Participant, StateOfParty];
    Employment => "employment", [Association];
    Owner => "owner", [Participant, StateOfParty];
    Ownership => "ownership", [Association];
    Asset => "asset", [Participant];
    MoneyAsset => "money_asset", [Asset];
    Transferor => "transferor", [Participant, StateOfParty];
    Transferee => "transferee", [Participant, StateOfParty];
    RecognizingLanguageCommunity => "recognizing_language_community", [StateOfLanguageCommunity, Participant];
    BeginningOfOwnership => "beginning_of_ownership", [Event];
    EndingOfOwnership => "ending_of_ownership", [Event];
    TransferOfOwnership => "transfer_of_ownership", [SociallyConstructedActivity];
    TransferOfOwnershipOfMoney => "transfer_of_ownership_of_money", [TransferOfOwnership];
    AgreementProcess => "agreement_process", [SociallyConstructedActivity];
    AgreementExecution => "agreement_execution", [SociallyConstructedActivity];
    ReachingAgreement => "reaching_agreement", [SociallyConstructedActivity];
    AgreeContract => "agree_contract", [ReachingAgreement];
    ContractProcess => "contract_process", [AgreementProcess];
    ContractExecution => "contract_execution", [AgreementExecution];
    ExchangeOfGoodsAndMoney => "exchange_of_goods_and_money", [AgreementExecution];
    SaleOfGoods => "sale_of_goods", [ContractProcess];
    Offer => "offer", [SociallyConstructedActivity];
    OfferForGoods => "offer_for_goods", [Offer];
    AcceptanceOfOffer => "acceptance_of_offer", [SociallyConstructedActivity];
    AcceptanceOfOfferForGoods => "acceptance_of_offer_for_goods", [AcceptanceOfOffer];
    OfferAndAcceptanceForGoods => "offer_and_acceptance_for_goods", [AgreeContract];
    RepresentationBySign => "representation_by_sign", [Association];
    ClassOfState => "class_of_state", [ClassOfSpatioTemporalExtent];
    ClassOfIndividual => "class_of_individual", [ClassOfState];
    ClassOfEvent => "class_of_event", [ClassOfSpatioTemporalExtent];
    ClassOfPointInTime => "class_of_point_in_time", [ClassOfEvent];
    ClassOfPeriodOfTime => "class_of_period_of_time", [ClassOfState];
    ClassOfPossibleWorld => "class_of_possible_world", [ClassOfIndividual, ClassOfPeriodOfTime];
    RequirementSpecification => "requirement_specification", [ClassOfSpatioTemporalExtent];
    PhysicalProperty => "physical_property", [ClassOfState];
    PhysicalPropertyRange => "physical_property_range", [ClassOfState];
    PhysicalQuantity => "physical_quantity", [PhysicalProperty];
    PhysicalQuantityRange => "physical_quantity_range", [PhysicalPropertyRange];
    KindOfPhysicalProperty => "kind_of_physical_property", [ClassOfClassOfSpatioTemporalExtent];
    KindOfPhysicalQuantity => "kind_of_physical_quantity", [KindOfPhysicalProperty];
    ClassOfStateOfPhysicalObject => "class_of_state_of_physical_object", [ClassOfState];
    ClassOfPhysicalObject => "class_of_physical_object", [ClassOfIndividual, ClassOfStateOfPhysicalObject];
    ClassOfStateOfOrdinaryPhysicalObject => "class_of_state_of_ordinary_physical_object", [ClassOfStateOfPhysicalObject];
    ClassOfOrdinaryPhysicalObject => "class_of_ordinary_physical_object", [ClassOfPhysicalObject, ClassOfStateOfOrdinaryPhysicalObject];
    ClassOfStateOfBiologicalObject => "class_of_state_of_biological_object", [ClassOfStateOfPhysicalObject];
    ClassOfBiologicalObject => "class_of_biological_object", [ClassOfPhysicalObject, ClassOfStateOfBiologicalObject];
    ClassOfStateOfOrdinaryBiologicalObject => "class_of_state_of_ordinary_biological_object", [ClassOfStateOfBiologicalObject, ClassOfStateOfOrdinaryPhysicalObject];
    ClassOfOrdinaryBiologicalObject => "class_of_ordinary_biological_object", [ClassOfBiologicalObject, ClassOfOrdinaryPhysicalObject, ClassOfStateOfOrdinaryBiologicalObject];
    ClassOfStateOfIntentionallyConstructedObject => "class_of_state_of_intentionally_constructed_object", [ClassOfState];
    ClassOfIntentionallyConstructedObject => "class_of_intentionally_constructed_object", [ClassOfIndividual, ClassOfStateOfIntentionallyConstructedObject];
    ClassOfStateOfFunctionalObject => "class_of_state_of_functional_object", [ClassOfStateOfPhysicalObject, ClassOfStateOfIntentionallyConstructedObject];
    ClassOfFunctionalObject => "class_of_functional_object", [ClassOfPhysicalObject, ClassOfIntentionallyConstructedObject, ClassOfStateOfFunctionalObject];
    ClassOfStateOfOrdinaryFunctionalObject => "class_of_state_of_ordinary_functional_object", [ClassOfStateOfFunctionalObject, ClassOfStateOfOrdinaryPhysicalObject];
    ClassOfOrdinaryFunctionalObject => "class_of_ordinary_functional_object", [ClassOfFunctionalObject, ClassOfOrdinaryPhysicalObject, ClassOfStateOfOrdinaryFunctionalObject];
    ClassOfStateOfSystem => "class_of_state_of_system", [ClassOfStateOfOrdinaryPhysicalObject];
    ClassOfSystem => "class_of_system", [ClassOfOrdinaryPhysicalObject, ClassOfStateOfSystem];
    ClassOfStateOfSystemComponent => "class_of_state_of_system_component", [ClassOfStateOfPhysicalObject];
    ClassOfSystemComponent => "class_of_system_component", [ClassOfPhysicalObject, ClassOfStateOfSystemComponent];
    ClassOfStateOfBiologicalSystem => "class_of_state_of_biological_system", [ClassOfStateOfOrdinaryBiologicalObject, ClassOfStateOfSystem];
    ClassOfBiologicalSystem => "class_of_biological_system", [ClassOfOrdinaryBiologicalObject, ClassOfSystem, ClassOfStateOfBiologicalSystem];
    ClassOfStateOfBiologicalSystemComponent => "class_of_state_of_biological_system_component", [ClassOfStateOfBiologicalObject, ClassOfStateOfSystemComponent];
    ClassOfBiologicalSystemComponent => "class_of_biological_system_component", [ClassOfBiologicalObject, ClassOfSystemComponent, ClassOfStateOfBiologicalSystemComponent];
    ClassOfStateOfFunctionalSystem => "class_of_state_of_functional_system", [ClassOfStateOfOrdinaryFunctionalObject, ClassOfStateOfSystem];
    ClassOfFunctionalSystem => "class_of_functional_system", [ClassOfOrdinaryFunctionalObject, ClassOfSystem, ClassOfStateOfFunctionalSystem];
    ClassOfStateOfFunctionalSystemComponent => "class_of_state_of_functional_system_component", [ClassOfStateOfFunctionalObject, ClassOfStateOfSystemComponent];
    ClassOfFunctionalSystemComponent => "class_of_functional_system_component", [ClassOfFunctionalObject, ClassOfSystemComponent, ClassOfStateOfFunctionalSystemComponent];
    ClassOfInstalledObject => "class_of_installed_object", [ClassOfStateOfOrdinaryPhysicalObject, ClassOfStateOfSystemComponent];
    ClassOfInstalledFunctionalSystemComponent => "class_of_installed_functional_system_component", [ClassOfInstalledObject, ClassOfStateOfFunctionalSystemComponent];
    ClassOfInPlaceBiologicalComponent => "class_of_in_place_biological_component", [ClassOfInstalledObject, ClassOfStateOfBiologicalSystemComponent, ClassOfStateOfOrdinaryBiologicalObject];
    ClassOfStateOfParty => "class_of_state_of_party", [ClassOfStateOfSystem];
    ClassOfParty => "class_of_party", [ClassOfSystem, ClassOfStateOfParty];
    ClassOfStateOfPerson => "class_of_state_of_person", [ClassOfStateOfBiologicalSystem, ClassOfStateOfParty];
    ClassOfPerson => "class_of_person", [ClassOfBiologicalSystem, ClassOfParty, ClassOfStateOfPerson];
    ClassOfStateOfSociallyConstructedObject => "class_of_state_of_socially_constructed_object", [ClassOfStateOfIntentionallyConstructedObject];
    ClassOfSociallyConstructedObject => "class_of_socially_constructed_object", [ClassOfIntentionallyConstructedObject, ClassOfStateOfSociallyConstructedObject];
    ClassOfStateOfOrganization => "class_of_state_of_organization", [ClassOfStateOfParty, ClassOfStateOfSociallyConstructedObject];
    ClassOfOrganization => "class_of_organization", [ClassOfParty, ClassOfSociallyConstructedObject, ClassOfStateOfOrganization];
    ClassOfStateOfOrganizationComponent => "class_of_state_of_organization_component", [ClassOfStateOfSystemComponent, ClassOfStateOfSociallyConstructedObject];
    ClassOfOrganizationComponent => "class_of_organization_component", [ClassOfSystemComponent, ClassOfSociallyConstructedObject, ClassOfStateOfOrganizationComponent];
    ClassOfStateOfPosition => "class_of_state_of_position", [ClassOfStateOfOrganizationComponent];
    ClassOfPosition => "class_of_position", [ClassOfOrganizationComponent, ClassOfStateOfPosition];
    ClassOfPersonInPosition => "class_of_person_in_position", [ClassOfInstalledObject, ClassOfStateOfPerson, ClassOfStateOfPosition];
    ClassOfStateOfSign => "class_of_state_of_sign", [ClassOfStateOfSociallyConstructedObject];
    ClassOfSign => "class_of_sign", [ClassOfSociallyConstructedObject, ClassOfStateOfSign];
    ClassOfStateOfActivity => "class_of_state_of_activity", [ClassOfState];
    ClassOfActivity => "class_of_activity", [ClassOfIndividual, ClassOfStateOfActivity];
    ClassOfStateOfAssociation => "class_of_state_of_association", [ClassOfState];
    ClassOfAssociation => "class_of_association", [ClassOfIndividual, ClassOfStateOfAssociation];
    ClassOfStateOfSociallyConstructedActivity => "class_of_state_of_socially_constructed_activity", [ClassOfStateOfActivity, ClassOfStateOfSociallyConstructedObject];
    ClassOfSociallyConstructedActivity => "class_of_socially_constructed_activity", [ClassOfActivity, ClassOfSociallyConstructedObject, ClassOfStateOfSociallyConstructedActivity];
    ClassOfStateOfAmountOfMoney => "class_of_state_of_amount_of_money", [ClassOfStateOfPhysicalObject, ClassOfStateOfSociallyConstructedObject];
    ClassOfAmountOfMoney => "class_of_amount_of_money", [ClassOfPhysicalObject, ClassOfSociallyConstructedObject, ClassOfStateOfAmountOfMoney];
    ClassOfStateOfSalesProductInstance => "class_of_state_of_sales_product_instance", [ClassOfStateOfOrdinaryFunctionalObject];
    ClassOfSalesProductInstance => "class_of_sales_product_instance", [ClassOfOrdinaryFunctionalObject, ClassOfStateOfSalesProductInstance];
    ClassOfParticipant => "class_of_participant", [ClassOfStateOfPhysicalObject];
    Role => "role", [ClassOfParticipant];
    ClassOfAgreementProcess => "class_of_agreement_process", [ClassOfSociallyConstructedActivity];
    ClassOfAgreementExecution => "class_of_agreement_execution", [ClassOfSociallyConstructedActivity];
    ClassOfReachingAgreement => "class_of_reaching_agreement", [ClassOfSociallyConstructedActivity];
    ClassOfAgreeContract => "class_of_agree_contract", [ClassOfReachingAgreement];
    ClassOfContractProcess => "class_of_contract_process", [ClassOfAgreementProcess];
    ClassOfContractExecution => "class_of_contract_execution", [ClassOfAgreementExecution];
    ClassOfOffer => "class_of_offer", [ClassOfSociallyConstructedActivity];
    Offering => "offering", [ClassOfOffer];
    ProductOffering => "product_offering", [Offering];
    SalesProduct => "sales_product", [ClassOfSalesProductInstance];
    SalesProductVersion => "sales_product_version", [ClassOfSalesProductInstance];
    ProductBrand => "product_brand", [ClassOfSalesProductInstance];
    Price => "price", [ClassOfAmountOfMoney];
    Currency => "currency", [ClassOfAmountOfMoney];
    ClassOfRepresentation => "class_of_representation", [ClassOfAssociation];
    RepresentationByPattern => "representation_by_pattern", [ClassOfRepresentation];
    Identification => "identification", [RepresentationByPattern];
    IdentificationOfPhysicalQuantity => "identification_of_physical_quantity", [Identification];
    Definition => "definition", [RepresentationByPattern];
    Description => "description", [RepresentationByPattern];
    Pattern => "pattern", [ClassOfSign];
    KindOfIndividual => "kind_of_individual", [ClassOfIndividual];
    KindOfPhysicalObject => "kind_of_physical_object", [ClassOfPhysicalObject, KindOfIndividual];
    KindOfOrdinaryPhysicalObject => "kind_of_ordinary_physical_object", [ClassOfOrdinaryPhysicalObject, KindOfPhysicalObject];
    KindOfBiologicalObject => "kind_of_biological_object", [ClassOfBiologicalObject, KindOfPhysicalObject];
    KindOfOrdinaryBiologicalObject => "kind_of_ordinary_biological_object", [ClassOfOrdinaryBiologicalObject, KindOfBiologicalObject, KindOfOrdinaryPhysicalObject];
    KindOfIntentionallyConstructedObject => "kind_of_intentionally_constructed_object", [ClassOfIntentionallyConstructedObject, KindOfIndividual];
    KindOfFunctionalObject => "kind_of_functional_object", [ClassOfFunctionalObject, KindOfIntentionallyConstructedObject, KindOfPhysicalObject];
    KindOfOrdinaryFunctionalObject => "kind_of_ordinary_functional_object", [ClassOfOrdinaryFunctionalObject, KindOfFunctionalObject, KindOfOrdinaryPhysicalObject];
    KindOfSystem => "kind_of_system", [ClassOfSystem, KindOfOrdinaryPhysicalObject];
    KindOfSystemComponent => "kind_of_system_component", [ClassOfSystemComponent, KindOfPhysicalObject];
    KindOfBiologicalSystem => "kind_of_biological_system", [ClassOfBiologicalSystem, KindOfSystem];
    KindOfBiologicalSystemComponent => "kind_of_biological_system_component", [ClassOfBiologicalSystemComponent, KindOfSystemComponent];
    KindOfFunctionalSystem => "kind_of_functional_system", [ClassOfFunctionalSystem, KindOfSystem];
    KindOfFunctionalSystemComponent => "kind_of_functional_system_component", [ClassOfFunctionalSystemComponent, KindOfSystemComponent];
    KindOfParty => "kind_of_party", [ClassOfParty, KindOfSystem];
    KindOfPerson => "kind_of_person", [ClassOfPerson, KindOfParty];
    KindOfSociallyConstructedObject => "kind_of_socially_constructed_object", [ClassOfSociallyConstructedObject, KindOfIntentionallyConstructedObject];
    KindOfOrganization => "kind_of_organization", [ClassOfOrganization, KindOfParty, KindOfSociallyConstructedObject];
    KindOfOrganizationComponent => "kind_of_organization_component", [ClassOfOrganizationComponent, KindOfSystemComponent, KindOfSociallyConstructedObject];
    KindOfPosition => "kind_of_position", [ClassOfPosition, KindOfOrganizationComponent];
    KindOfActivity => "kind_of_activity", [ClassOfActivity];
    KindOfAssociation => "kind_of_association", [ClassOfAssociation];
}

impl EntityKind {
    /// Number of kinds in the vocabulary.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the HQDM local name if `iri` is in the HQDM namespace.
    #[must_use]
    pub fn local_name(iri: &str) -> Option<&str> {
        iri.strip_prefix(iris::HQDM)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<EntityKind> for crate::Identifier {
    fn from(kind: EntityKind) -> Self {
        crate::Identifier::trusted(kind.iri())
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.name().to_owned()
    }
}

impl TryFrom<String> for EntityKind {
    type Error = crate::Error;

    fn try_from(value: String) -> crate::Result<Self> {
        crate::KindRegistry::global().lookup(&value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EntityKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EntityKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::try_from(name).map_err(serde::de::Error::custom)
    }
}
