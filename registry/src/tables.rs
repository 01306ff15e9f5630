//! Built-in language tables.

use conllulex_core::{LemmaColumn, Namespace};

use crate::{LanguageConfig, LanguageConfigBuilder};

const BASE_LEXCATS: &[&str] = &[
    "N", "PRON", "V", "P", "PP", "INF", "INF.P", "POSS", "PRON.POSS", "DISC", "AUX", "ADJ", "ADV",
    "DET", "CCONJ", "SCONJ", "INTJ", "NUM", "SYM", "PUNCT", "X",
];

const HINDI_EXTRA_LEXCATS: &[&str] = &[
    "PART",
    "PRON.NOM",
    "PRON.OBL",
    "PRON.WH",
    "PRON.REFL",
    "PART.FOC",
];

const CHINESE_LEXCATS: &[&str] = &[
    "BA", "DE", "LB", "LC", "MSP", "N", "PRON", "V", "P", "AUX", "ADJ", "ADV", "DET", "PART",
    "CCONJ", "SCONJ", "INTJ", "NUM", "SYM", "PUNCT", "DISC", "X",
];

const LATIN_EXTRA_LEXCATS: &[&str] = &["V.GER", "V.PART"];

/// Verbal MWE subtypes (PARSEME 1.1).
const ENGLISH_VERB_SUBTYPES: &[&str] = &[
    "V.VID",
    "V.VPC.full",
    "V.VPC.semi",
    "V.LVC.full",
    "V.LVC.cause",
    "V.IAV",
];

const LABEL_BEARING: &[&str] = &["N", "V", "P", "PP", "INF.P", "POSS", "PRON.POSS"];

const ENGLISH_COMBOS: &[(&str, &str)] = &[
    ("p.Circumstance", "p.Locus"),
    ("p.Circumstance", "p.Path"),
    ("p.Locus", "p.Goal"),
    ("p.Locus", "p.Source"),
    ("p.Characteristic", "p.Stuff"),
    ("p.Whole", "p.Gestalt"),
    ("p.Org", "p.Gestalt"),
    ("p.QuantityItem", "p.Gestalt"),
    ("p.Goal", "p.Locus"),
];

const ENGLISH_BANNED: &[&str] = &[
    "p.Experiencer",
    "p.Stimulus",
    "p.Originator",
    "p.Recipient",
    "p.SocialRel",
    "p.Org",
    "p.OrgMember",
    "p.Ensemble",
    "p.QuantityValue",
];

const ENGLISH_MISMATCHES: &[(&str, &str)] = &[
    ("NOUN", "N"),
    ("PROPN", "N"),
    ("VERB", "V"),
    ("ADP", "P"),
    ("ADV", "P"),
    ("SCONJ", "P"),
    ("ADP", "DISC"),
    ("ADV", "DISC"),
    ("SCONJ", "DISC"),
    ("PART", "POSS"),
];

fn concat(base: &[&'static str], extra: &[&'static str]) -> Vec<&'static str> {
    base.iter().chain(extra).copied().collect()
}

pub(crate) fn english() -> LanguageConfig {
    LanguageConfigBuilder::new("en")
        .permit_combos(ENGLISH_COMBOS)
        .ban_functions(ENGLISH_BANNED)
        .allow_mismatches(ENGLISH_MISMATCHES)
        .exception("infinitive-marker", |d| {
            d.xpos_is("TO") && d.lexcat.starts_with("INF")
        })
        .exception("for-subordinator", |d| {
            (d.xpos_is("TO") != d.lexcat.starts_with("INF"))
                && d.upos == "SCONJ"
                && d.lexlemma == "for"
        })
        .exception("nominal-symbol", |d| {
            (matches!(d.upos, "NOUN" | "PROPN") != (d.lexcat == "N"))
                && (matches!(d.upos, "SYM" | "X") || matches!(d.lexcat, "PRON" | "DISC"))
        })
        .exception("copula-as-verb", |d| {
            ((d.upos == "AUX") != (d.lexcat == "AUX")) && d.lemma == "be" && d.lexcat == "V"
        })
        .exception("verb-as-adjective", |d| {
            ((d.upos == "VERB") != (d.lexcat == "V"))
                && (d.lexcat == "ADJ" || (d.lemma == "be" && d.lexcat == "V"))
        })
        .exception("pronoun", |d| {
            (d.upos == "PRON" && d.lexcat == "PRON") || d.lexcat == "PRON.POSS"
        })
        // PART covers negation markers.
        .exception("adverbial-particle", |d| {
            d.lexcat == "ADV" && matches!(d.upos, "ADV" | "PART")
        })
        .exception("versus-conjunction", |d| {
            d.upos == "ADP" && d.lexcat == "CCONJ" && d.lemma == "versus"
        })
        .vocabulary(&concat(BASE_LEXCATS, ENGLISH_VERB_SUBTYPES))
        .mwe_only(&concat(&["PP"], ENGLISH_VERB_SUBTYPES))
        .label_bearing(LABEL_BEARING)
        .verb_subtypes(ENGLISH_VERB_SUBTYPES, Namespace::Verb)
        .build()
}

pub(crate) fn hindi() -> LanguageConfig {
    LanguageConfigBuilder::new("hi")
        .permit_combos(ENGLISH_COMBOS)
        .permit_combos(&[
            ("p.Characteristic", "p.QuantityValue"),
            ("p.PartPortion", "p.Characteristic"),
            ("p.Gestalt", "p.Whole"),
            ("p.Topic", "p.Theme"),
        ])
        .ban_functions(&[
            "p.Experiencer",
            "p.Stimulus",
            "p.Originator",
            "p.SocialRel",
            "p.Org",
            "p.OrgMember",
            "p.Ensemble",
        ])
        .allow_mismatches(ENGLISH_MISMATCHES)
        .allow_mismatches(&[("PART", "P")])
        .exception("possessive-pronoun", |d| d.lexcat == "P" && d.upos == "PRON")
        .exception("adverbial-particle", |d| d.lexcat == "ADV" && d.upos == "PART")
        .extra_prepositional_labels(&["p.Focus", "p.NONSNACS"])
        // Postpositions and agreement-inflected forms.
        .whitelist("का", &["की", "के"])
        .whitelist("वाला", &["वाली", "वाले"])
        .whitelist("अपना", &["अपनी", "अपने"])
        .whitelist("मेरा", &["मेरी", "मेरे"])
        .whitelist("तेरा", &["तेरी", "तेरे"])
        .whitelist("हमारा", &["हमारी", "हमारे"])
        .whitelist("तुम्हारा", &["तुम्हारी", "तुम्हारे"])
        .whitelist("उसका", &["उसकी", "उसके"])
        .whitelist("इसका", &["इसकी", "इसके"])
        .whitelist("उनका", &["उनकी", "उनके"])
        .whitelist("इनका", &["इनकी", "इनके"])
        .whitelist("किसका", &["किसकी", "किसके"])
        .whitelist("रहा", &["रही", "रहे"])
        .lemma_column(LemmaColumn::Word)
        .exempt_from_label_check(&["PRON", "PART"])
        .vocabulary(&concat(BASE_LEXCATS, HINDI_EXTRA_LEXCATS))
        .mwe_only(&["PP"])
        .label_bearing(LABEL_BEARING)
        .pronoun_labels(&["p.Focus", "p.`d"])
        .build()
}

pub(crate) fn chinese() -> LanguageConfig {
    LanguageConfigBuilder::new("zh")
        .permit_combos(ENGLISH_COMBOS)
        .permit_combo("p.Circumstance", "p.Time")
        .ban_functions(&[
            "p.Stimulus",
            "p.Originator",
            "p.SocialRel",
            "p.Org",
            "p.OrgMember",
            "p.QuantityValue",
        ])
        .allow_mismatches(ENGLISH_MISMATCHES)
        .allow_mismatches(&[("PART", "ADV"), ("VERB", "P")])
        // Localizers, 把 and long 被.
        .exception("localizer-or-passive", |d| {
            matches!(d.xpos, Some("LC" | "BA" | "LB"))
        })
        // Some Chinese data carries treebank tags (P, VV) in the UPOS column.
        .exception("adpositional-discourse", |d| d.lexcat == "DISC" && d.upos == "P")
        .exception("fixed-lexlemma", |d| {
            matches!(d.lexlemma, "除了" | "为了" | "相对于" | "的" | "地")
        })
        .exception("coverb", |d| {
            d.lexcat == "P"
                && d.upos == "VV"
                && matches!(d.lexlemma, "在" | "到" | "给" | "用" | "从" | "向" | "往" | "跟")
        })
        .vocabulary(CHINESE_LEXCATS)
        .mwe_only(&["PP"])
        .label_bearing(LABEL_BEARING)
        .build()
}

pub(crate) fn latin() -> LanguageConfig {
    LanguageConfigBuilder::new("la")
        .permit_combos(ENGLISH_COMBOS)
        .ban_functions(ENGLISH_BANNED)
        .allow_mismatches(ENGLISH_MISMATCHES)
        .vocabulary(&concat(BASE_LEXCATS, LATIN_EXTRA_LEXCATS))
        .mwe_only(&["PP"])
        .label_bearing(&["N", "P", "PP", "INF.P", "POSS", "PRON.POSS", "V.GER", "V.PART"])
        .noun_namespace(Namespace::Preposition)
        .bare_verb_labeled(false)
        .verb_subtypes(LATIN_EXTRA_LEXCATS, Namespace::Preposition)
        .pronoun_labels(&[])
        .build()
}
