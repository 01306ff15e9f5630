//! The label inventory.

/// Noun supersenses.
pub const NOUN_SUPERSENSES: &[&str] = &[
    "n.ACT",
    "n.ANIMAL",
    "n.ARTIFACT",
    "n.ATTRIBUTE",
    "n.BODY",
    "n.COGNITION",
    "n.COMMUNICATION",
    "n.EVENT",
    "n.FEELING",
    "n.FOOD",
    "n.GROUP",
    "n.LOCATION",
    "n.MOTIVE",
    "n.NATURALOBJECT",
    "n.OTHER",
    "n.PERSON",
    "n.PHENOMENON",
    "n.PLANT",
    "n.POSSESSION",
    "n.PROCESS",
    "n.QUANTITY",
    "n.RELATION",
    "n.SHAPE",
    "n.STATE",
    "n.SUBSTANCE",
    "n.TIME",
];

/// Verb supersenses.
pub const VERB_SUPERSENSES: &[&str] = &[
    "v.body",
    "v.change",
    "v.cognition",
    "v.communication",
    "v.competition",
    "v.consumption",
    "v.contact",
    "v.creation",
    "v.emotion",
    "v.motion",
    "v.perception",
    "v.possession",
    "v.social",
    "v.stative",
    "v.weather",
];

/// Adpositional supersenses (SNACS) as (label, parent) pairs. Top-level
/// scene roles have the namespace root `p` as parent.
pub const PREPOSITION_TREE: &[(&str, &str)] = &[
    ("p.Circumstance", "p"),
    ("p.Temporal", "p.Circumstance"),
    ("p.Time", "p.Temporal"),
    ("p.StartTime", "p.Time"),
    ("p.EndTime", "p.Time"),
    ("p.Frequency", "p.Temporal"),
    ("p.Duration", "p.Temporal"),
    ("p.Interval", "p.Temporal"),
    ("p.Locus", "p.Circumstance"),
    ("p.Source", "p.Locus"),
    ("p.Goal", "p.Locus"),
    ("p.Path", "p.Circumstance"),
    ("p.Direction", "p.Path"),
    ("p.Extent", "p.Path"),
    ("p.Means", "p.Circumstance"),
    ("p.Manner", "p.Circumstance"),
    ("p.Explanation", "p.Circumstance"),
    ("p.Purpose", "p.Explanation"),
    ("p.Participant", "p"),
    ("p.Causer", "p.Participant"),
    ("p.Agent", "p.Causer"),
    ("p.Co-Agent", "p.Agent"),
    ("p.Theme", "p.Participant"),
    ("p.Co-Theme", "p.Theme"),
    ("p.Topic", "p.Theme"),
    ("p.Stimulus", "p.Participant"),
    ("p.Experiencer", "p.Participant"),
    ("p.Originator", "p.Participant"),
    ("p.Recipient", "p.Participant"),
    ("p.Cost", "p.Participant"),
    ("p.Beneficiary", "p.Participant"),
    ("p.Instrument", "p.Participant"),
    ("p.Configuration", "p"),
    ("p.Identity", "p.Configuration"),
    ("p.Species", "p.Configuration"),
    ("p.Gestalt", "p.Configuration"),
    ("p.Possessor", "p.Gestalt"),
    ("p.Whole", "p.Gestalt"),
    ("p.Org", "p.Whole"),
    ("p.Ensemble", "p.Whole"),
    ("p.QuantityItem", "p.Whole"),
    ("p.Characteristic", "p.Configuration"),
    ("p.Possession", "p.Characteristic"),
    ("p.PartPortion", "p.Characteristic"),
    ("p.Stuff", "p.PartPortion"),
    ("p.QuantityValue", "p.Characteristic"),
    ("p.Approximator", "p.QuantityValue"),
    ("p.Accompanier", "p.Configuration"),
    ("p.InsteadOf", "p.Configuration"),
    ("p.ComparisonRef", "p.Configuration"),
    ("p.RateUnit", "p.Configuration"),
    ("p.SocialRel", "p.Configuration"),
    ("p.OrgMember", "p.SocialRel"),
];
