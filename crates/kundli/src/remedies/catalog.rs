//! Reference mantra and pilgrimage catalogs. Independent of any chart.

use serde::{Deserialize, Serialize};

use crate::chart::Planet;
use crate::doshas::RemedyTiming;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MantraDetails {
    pub sanskrit: String,
    pub transliteration: String,
    pub translation: String,
    pub pronunciation: String,
    pub repetitions: u32,
    pub timing: RemedyTiming,
    pub benefits: Vec<String>,
    pub scripture_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilgrimageGuide {
    pub temple: String,
    pub deity: String,
    pub location: String,
    pub significance: String,
    pub best_time_to_visit: String,
    pub rituals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nearby_temples: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn timing(best_time: &str, best_day: &str, nakshatra: Option<&str>) -> RemedyTiming {
    RemedyTiming {
        best_time: Some(best_time.to_string()),
        best_day: Some(best_day.to_string()),
        nakshatra: nakshatra.map(str::to_string),
        avoid_time: None,
    }
}

// (sanskrit, transliteration, pronunciation, weekday)
fn beej_mantra(planet: Planet) -> (&'static str, &'static str, &'static str, &'static str) {
    match planet {
        Planet::Sun => (
            "ॐ ह्रां ह्रीं ह्रौं सः सूर्याय नमः",
            "Om Hraam Hreem Hraum Sah Suryaya Namah",
            "Om Hraam Hreem Hraum Sah Soor-yaa-ya Na-mah",
            "Sunday",
        ),
        Planet::Moon => (
            "ॐ श्रां श्रीं श्रौं सः चन्द्रमसे नमः",
            "Om Shraam Shreem Shraum Sah Chandramase Namah",
            "Om Shraam Shreem Shraum Sah Chan-dra-ma-se Na-mah",
            "Monday",
        ),
        Planet::Mars => (
            "ॐ क्रां क्रीं क्रौं सः भौमाय नमः",
            "Om Kraam Kreem Kraum Sah Bhaumaya Namah",
            "Om Kraam Kreem Kraum Sah Bhau-maa-ya Na-mah",
            "Tuesday",
        ),
        Planet::Mercury => (
            "ॐ ब्रां ब्रीं ब्रौं सः बुधाय नमः",
            "Om Braam Breem Braum Sah Budhaya Namah",
            "Om Braam Breem Braum Sah Bu-dhaa-ya Na-mah",
            "Wednesday",
        ),
        Planet::Jupiter => (
            "ॐ ग्रां ग्रीं ग्रौं सः गुरवे नमः",
            "Om Graam Greem Graum Sah Gurave Namah",
            "Om Graam Greem Graum Sah Gu-ra-ve Na-mah",
            "Thursday",
        ),
        Planet::Venus => (
            "ॐ द्रां द्रीं द्रौं सः शुक्राय नमः",
            "Om Draam Dreem Draum Sah Shukraya Namah",
            "Om Draam Dreem Draum Sah Shuk-raa-ya Na-mah",
            "Friday",
        ),
        Planet::Saturn => (
            "ॐ प्रां प्रीं प्रौं सः शनैश्चराय नमः",
            "Om Praam Preem Praum Sah Shanaishcharaya Namah",
            "Om Praam Preem Praum Sah Sha-naish-cha-raa-ya Na-mah",
            "Saturday",
        ),
        Planet::Rahu => (
            "ॐ भ्रां भ्रीं भ्रौं सः राहवे नमः",
            "Om Bhraam Bhreem Bhraum Sah Rahave Namah",
            "Om Bhraam Bhreem Bhraum Sah Raa-ha-ve Na-mah",
            "Saturday",
        ),
        Planet::Ketu => (
            "ॐ स्रां स्रीं स्रौं सः केतवे नमः",
            "Om Sraam Sreem Sraum Sah Ketave Namah",
            "Om Sraam Sreem Sraum Sah Ke-ta-ve Na-mah",
            "Tuesday",
        ),
    }
}

fn planetary_mantra(planet: Planet) -> MantraDetails {
    let (sanskrit, transliteration, pronunciation, day) = beej_mantra(planet);
    let mut benefits = vec![format!("Strengthens a weak or afflicted {}", planet)];
    benefits.extend(
        planet
            .effects()
            .iter()
            .take(2)
            .map(|e| format!("Supports {}", e.to_lowercase())),
    );
    MantraDetails {
        sanskrit: sanskrit.to_string(),
        transliteration: transliteration.to_string(),
        translation: format!("Om, with the seed syllables of {}, I bow to {}.", planet, planet),
        pronunciation: pronunciation.to_string(),
        repetitions: 108,
        timing: timing("Sunrise or during the planet's hora", day, None),
        benefits,
        scripture_source: format!("Navagraha Beej Mantra for {} (tantric tradition)", planet),
    }
}

/// Maha Mrityunjaya and Gayatri, then the nine planetary beej mantras.
pub fn get_all_mantras() -> Vec<MantraDetails> {
    let mut mantras = vec![
        MantraDetails {
            sanskrit: "ॐ त्र्यम्बकं यजामहे सुगन्धिं पुष्टिवर्धनम् । उर्वारुकमिव बन्धनान्मृत्योर्मुक्षीय माऽमृतात् ।।".to_string(),
            transliteration: "Om Tryambakam Yajamahe Sugandhim Pushtivardhanam | Urvarukamiva Bandhanan Mrityor Mukshiya Maamritat ||".to_string(),
            translation: "We worship the Three-Eyed One (Lord Shiva), who is fragrant and nourishes all beings. May He liberate us from death for the sake of immortality, just as the ripe cucumber is effortlessly separated from its vine.".to_string(),
            pronunciation: "Om Tri-yam-ba-kam Ya-ja-ma-he Su-gan-dhim Push-ti-var-dha-nam | Ur-va-ru-ka-mi-va Ban-dha-nan Mri-tyor Muk-shi-ya Maam-ri-tat".to_string(),
            repetitions: 108,
            timing: timing(
                "Brahma Muhurat (4:00 AM - 6:00 AM) or Monday evening",
                "Monday, Saturday",
                Some("Ardra, Ashlesha for maximum power"),
            ),
            benefits: strings(&[
                "Protection from accidents and untimely death",
                "Removes Kaal Sarp Dosha effects",
                "Healing of diseases",
                "Liberation from fears",
                "Spiritual progress",
            ]),
            scripture_source: "Rigveda 7.59.12 (Maha Mrityunjaya Mantra)".to_string(),
        },
        MantraDetails {
            sanskrit: "ॐ भूर्भुवः स्वः तत्सवितुर्वरेण्यं भर्गो देवस्य धीमहि धियो यो नः प्रचोदयात् ।।".to_string(),
            transliteration: "Om Bhur Bhuvah Svah Tat Savitur Varenyam Bhargo Devasya Dhimahi Dhiyo Yo Nah Prachodayat ||".to_string(),
            translation: "We meditate on the glory of the Creator who has created the Universe; who is worthy of worship; who is the embodiment of knowledge and light; who is the remover of all sin and ignorance. May He enlighten our intellect.".to_string(),
            pronunciation: "Om Bhur Bhu-vah Svah Tat Sa-vi-tur Va-ren-yam Bhar-go De-vas-ya Dhi-ma-hi Dhi-yo Yo Nah Pra-cho-da-yat".to_string(),
            repetitions: 108,
            timing: timing(
                "Sunrise (most powerful), can be chanted anytime",
                "Any day, especially Sunday",
                None,
            ),
            benefits: strings(&[
                "Overall spiritual and material prosperity",
                "Purifies mind and body",
                "Improves concentration and intelligence",
                "Removes all doshas gradually",
                "Divine protection",
            ]),
            scripture_source: "Rigveda 3.62.10 (Gayatri Mantra - Most powerful Vedic mantra)".to_string(),
        },
    ];
    mantras.extend(Planet::ALL.iter().map(|&p| planetary_mantra(p)));
    mantras
}

struct GuideSpec {
    temple: &'static str,
    deity: &'static str,
    location: &'static str,
    significance: &'static str,
    best_time: &'static str,
    rituals: &'static [&'static str],
    nearby: &'static [&'static str],
    accommodation: &'static str,
}

const GUIDES: [GuideSpec; 5] = [
    GuideSpec {
        temple: "Trimbakeshwar Temple",
        deity: "Lord Shiva (One of 12 Jyotirlingas)",
        location: "Trimbak, Nashik District, Maharashtra - 28 km from Nashik city",
        significance: "Most powerful temple for Kaal Sarp Dosha removal. Source of Godavari river. One of the 12 sacred Jyotirlingas.",
        best_time: "Nag Panchami (July-August), Shravan month (July-August), Any Monday. Avoid Shravan Shivratri due to huge crowds.",
        rituals: &[
            "Kaal Sarp Puja (book in advance): ₹2,100 - ₹11,000",
            "Narayan Nagbali Puja (for Pitra Dosha): ₹21,000 - ₹51,000",
            "Rudrabhishek with panchamrit",
            "Mahamrityunjaya Jaap (21,000 times)",
            "Holy bath in Kushavarta Kund",
            "Donation to priests and poor",
        ],
        nearby: &[
            "Kushavarta Kund (Godavari origin)",
            "Ganga Sagar (holy pond)",
            "Brahmagiri Hill temple",
        ],
        accommodation: "Temple trust rooms (₹500-1500), Private hotels (₹1000-3000). Book in advance during Shravan.",
    },
    GuideSpec {
        temple: "Mangalnath Temple",
        deity: "Lord Mangal (Mars)",
        location: "Ujjain, Madhya Pradesh - On banks of Shipra river",
        significance: "Birthplace of Mars (Mangal). Most powerful temple for Manglik Dosha removal. One of the few temples dedicated to Mars.",
        best_time: "Tuesdays, Mangal Pradosh, Any auspicious Tuesday. Avoid summers (March-June) due to heat.",
        rituals: &[
            "Mangal Bhat Puja: ₹1,100 - ₹5,100",
            "Kumbh Vivah (symbolic marriage before actual marriage): ₹11,000 - ₹21,000",
            "Mangal Shanti Puja",
            "Offering of red flowers, sindoor, red cloth",
            "Donation of red lentils and sweets",
        ],
        nearby: &[
            "Mahakaleshwar Jyotirlinga (must visit)",
            "Harsiddhi Temple",
            "Kal Bhairav Temple",
            "Ram Ghat (for evening aarti)",
        ],
        accommodation: "Temple trust rooms, Private hotels near Mahakaleshwar Temple (₹800-2500)",
    },
    GuideSpec {
        temple: "Gaya Vishnupad Temple",
        deity: "Lord Vishnu (Footprint of Lord Vishnu)",
        location: "Gaya, Bihar - On banks of Falgu river",
        significance: "Most sacred place for Pind Daan (ancestral rituals). Performing shraddh here liberates 7 generations of ancestors.",
        best_time: "Pitru Paksha (15 days before Diwali - most important), Any Amavasya. September-October ideal weather.",
        rituals: &[
            "Pind Daan at 45 sacred ghats: ₹21,000 - ₹51,000",
            "Tarpan (water offering) to ancestors",
            "Brahmin Bhojan (feeding Brahmins)",
            "Donation of clothes, food, and money",
            "Holy bath in Falgu river",
            "Complete ceremony takes 2-3 days",
        ],
        nearby: &[
            "Akshayavat (sacred fig tree)",
            "Mangla Gauri Temple",
            "Bodh Gaya (Buddha enlightenment place) - 17 km",
        ],
        accommodation: "Dharamshalas (₹300-800), Hotels (₹1000-2500). Book well in advance during Pitru Paksha.",
    },
    GuideSpec {
        temple: "Kamakhya Temple",
        deity: "Goddess Kamakhya (Adi Shakti)",
        location: "Guwahati, Assam - Nilachal Hill",
        significance: "One of 51 Shakti Peethas. Most powerful for female-related issues, fertility, Manglik Dosha for women.",
        best_time: "Ambubachi Mela (June), Durga Puja, Avoid monsoon floods.",
        rituals: &[
            "Tantric puja by temple priests",
            "Special puja for fertility and progeny: ₹2,100 - ₹11,000",
            "Red flower offerings",
            "Donation of red cloth",
        ],
        nearby: &[
            "9 other Shakti temples on Nilachal Hill",
            "Umananda Temple (river island)",
        ],
        accommodation: "Temple trust rooms, Guwahati city hotels (₹800-3000)",
    },
    GuideSpec {
        temple: "Tirupati Balaji",
        deity: "Lord Venkateswara (Vishnu)",
        location: "Tirumala, Andhra Pradesh",
        significance: "World's richest temple. Fulfills all desires when visited with pure devotion. Powerful for overall prosperity.",
        best_time: "Brahmotsavam (September-October), Any time. Avoid peak season crowds (April-June, December-January).",
        rituals: &[
            "Suprabhatam Seva (early morning darshan): Book online",
            "Kalyana Katta (marriage ritual): ₹300",
            "Hair offering (Mokku) for wish fulfillment",
            "Donate to Annadanam (free food program)",
        ],
        nearby: &["Sri Padmavathi Temple (must visit for couples)", "Tiruchanur"],
        accommodation: "TTD accommodations (₹100-2000). Book 3 months in advance online.",
    },
];

pub fn get_pilgrimage_guides() -> Vec<PilgrimageGuide> {
    GUIDES
        .iter()
        .map(|g| PilgrimageGuide {
            temple: g.temple.to_string(),
            deity: g.deity.to_string(),
            location: g.location.to_string(),
            significance: g.significance.to_string(),
            best_time_to_visit: g.best_time.to_string(),
            rituals: strings(g.rituals),
            nearby_temples: strings(g.nearby),
            accommodation: Some(g.accommodation.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mantra_catalog() {
        let mantras = get_all_mantras();
        assert_eq!(mantras.len(), 11);
        assert!(mantras[0].scripture_source.contains("Maha Mrityunjaya"));
        assert!(mantras[1].transliteration.starts_with("Om Bhur Bhuvah"));
        assert!(mantras.iter().all(|m| m.repetitions == 108));
        let saturn = &mantras[2 + Planet::Saturn.index()];
        assert_eq!(saturn.timing.best_day.as_deref(), Some("Saturday"));
    }

    #[test]
    fn test_pilgrimage_guides() {
        let guides = get_pilgrimage_guides();
        let temples: Vec<&str> = guides.iter().map(|g| g.temple.as_str()).collect();
        assert_eq!(
            temples,
            vec![
                "Trimbakeshwar Temple",
                "Mangalnath Temple",
                "Gaya Vishnupad Temple",
                "Kamakhya Temple",
                "Tirupati Balaji"
            ]
        );
        assert!(guides.iter().all(|g| !g.rituals.is_empty()));
    }
}
