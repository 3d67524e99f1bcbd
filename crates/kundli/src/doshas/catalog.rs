//! Static remedy tables and their conversion into owned dosha records.

use super::types::{
    Dosha, DoshaRemedy, DoshaType, LalKitabRemedy, RemedyCategory, RemedyProcedure, RemedyTiming,
    ScriptureReference, Severity,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TimingSpec {
    pub best_time: Option<&'static str>,
    pub best_day: Option<&'static str>,
    pub nakshatra: Option<&'static str>,
    pub avoid_time: Option<&'static str>,
}

impl TimingSpec {
    pub const fn at(best_time: &'static str, best_day: &'static str) -> Self {
        Self {
            best_time: Some(best_time),
            best_day: Some(best_day),
            nakshatra: None,
            avoid_time: None,
        }
    }

    pub const fn time(best_time: &'static str) -> Self {
        Self {
            best_time: Some(best_time),
            best_day: None,
            nakshatra: None,
            avoid_time: None,
        }
    }

    pub const fn day(best_day: &'static str) -> Self {
        Self {
            best_time: None,
            best_day: Some(best_day),
            nakshatra: None,
            avoid_time: None,
        }
    }

    pub const fn nakshatra(mut self, nakshatra: &'static str) -> Self {
        self.nakshatra = Some(nakshatra);
        self
    }

    pub const fn avoid(mut self, avoid_time: &'static str) -> Self {
        self.avoid_time = Some(avoid_time);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RemedySpec {
    pub category: RemedyCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub timing: TimingSpec,
    pub materials: &'static [&'static str],
    pub direction: Option<&'static str>,
    pub offerings: &'static [&'static str],
    pub duration: &'static str,
    pub expected_results: &'static str,
    pub cost: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScriptureSpec {
    pub scripture: &'static str,
    pub chapter: &'static str,
    pub verse: &'static str,
    pub text: &'static str,
    pub translation: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LalKitabSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub procedure: &'static [&'static str],
    pub duration: &'static str,
    pub benefits: &'static str,
    pub note: Option<&'static str>,
}

/// Everything about a dosha that does not depend on the chart.
pub(crate) struct DoshaProfile {
    pub dosha_type: DoshaType,
    pub effects: &'static [&'static str],
    pub cancellation: &'static [&'static str],
    pub remedies: &'static [RemedySpec],
    pub scriptures: &'static [ScriptureSpec],
    pub lal_kitab: &'static [LalKitabSpec],
    pub insight: &'static str,
}

/// Chart-dependent parts of a detection.
pub(crate) struct Finding {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    pub formation: String,
    /// Placement-specific effects listed ahead of the shared ones.
    pub leading_effects: Vec<String>,
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl From<&TimingSpec> for RemedyTiming {
    fn from(entry: &TimingSpec) -> Self {
        RemedyTiming {
            best_time: entry.best_time.map(str::to_string),
            best_day: entry.best_day.map(str::to_string),
            nakshatra: entry.nakshatra.map(str::to_string),
            avoid_time: entry.avoid_time.map(str::to_string),
        }
    }
}

impl From<&RemedySpec> for DoshaRemedy {
    fn from(entry: &RemedySpec) -> Self {
        DoshaRemedy {
            category: entry.category,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            procedure: RemedyProcedure {
                steps: owned(entry.steps),
                timing: (&entry.timing).into(),
                materials: owned(entry.materials),
                direction: entry.direction.map(str::to_string),
                offerings: owned(entry.offerings),
            },
            duration: entry.duration.to_string(),
            expected_results: entry.expected_results.to_string(),
            cost: entry.cost.map(str::to_string),
        }
    }
}

impl From<&ScriptureSpec> for ScriptureReference {
    fn from(entry: &ScriptureSpec) -> Self {
        ScriptureReference {
            scripture: entry.scripture.to_string(),
            chapter: entry.chapter.to_string(),
            verse: entry.verse.to_string(),
            text: entry.text.to_string(),
            translation: entry.translation.to_string(),
        }
    }
}

impl From<&LalKitabSpec> for LalKitabRemedy {
    fn from(entry: &LalKitabSpec) -> Self {
        LalKitabRemedy {
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            procedure: owned(entry.procedure),
            duration: entry.duration.to_string(),
            benefits: entry.benefits.to_string(),
            note: entry.note.map(str::to_string),
        }
    }
}

impl DoshaProfile {
    pub fn remedies(&self) -> Vec<DoshaRemedy> {
        self.remedies.iter().map(DoshaRemedy::from).collect()
    }

    pub fn build(&self, finding: Finding) -> Dosha {
        let mut effects = finding.leading_effects;
        effects.extend(owned(self.effects));
        Dosha {
            name: finding.name,
            dosha_type: self.dosha_type,
            severity: finding.severity,
            description: finding.description,
            effects,
            formation: finding.formation,
            cancellation: owned(self.cancellation),
            remedies: self.remedies(),
            scripture_reference: self.scriptures.iter().map(ScriptureReference::from).collect(),
            lal_kitab_remedies: self.lal_kitab.iter().map(LalKitabRemedy::from).collect(),
            bhrigu_samhita_insight: Some(self.insight.to_string()),
        }
    }
}

/// Shorthand for a remedy with no materials, direction, offerings or cost.
pub(crate) const fn plain(
    category: RemedyCategory,
    title: &'static str,
    description: &'static str,
    steps: &'static [&'static str],
    timing: TimingSpec,
    duration: &'static str,
    expected_results: &'static str,
) -> RemedySpec {
    RemedySpec {
        category,
        title,
        description,
        steps,
        timing,
        materials: &[],
        direction: None,
        offerings: &[],
        duration,
        expected_results,
        cost: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_builders() {
        let timing: RemedyTiming = (&TimingSpec::day("Tuesday").nakshatra("Chitra")).into();
        assert_eq!(timing.best_time, None);
        assert_eq!(timing.best_day.as_deref(), Some("Tuesday"));
        assert_eq!(timing.nakshatra.as_deref(), Some("Chitra"));
    }

    #[test]
    fn test_plain_remedy_has_no_extras() {
        const SPEC: RemedySpec = plain(
            RemedyCategory::Fasting,
            "Fast",
            "desc",
            &["one", "two"],
            TimingSpec::day("Tuesday"),
            "21 Tuesdays",
            "Calm",
        );
        let remedy = DoshaRemedy::from(&SPEC);
        assert_eq!(remedy.procedure.steps.len(), 2);
        assert!(remedy.procedure.materials.is_empty());
        assert!(remedy.cost.is_none());
    }
}
