//! State-wise extreme weather risk calendar
//!
//! Month-based regional risks (cyclone, heatwave, flood, frost, ...) and the
//! bilingual advisory attached to each risk. Pure table lookups; the month is
//! always passed in so results do not depend on the clock.

use chrono::{Datelike, Local, Month};
use serde::Serialize;
use std::fmt;

use crate::models::AlertType;

/// Kind of regional weather risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskKind {
    CycloneRisk,
    HeatwaveRisk,
    ColdWave,
    FrostRisk,
    HeavyRainfall,
    FloodRisk,
    FogRisk,
    HeavySnowfall,
}

impl RiskKind {
    /// Whether the risk changes irrigation or crop protection plans
    #[must_use]
    pub fn affects_farm_plan(&self) -> bool {
        matches!(
            self,
            RiskKind::HeatwaveRisk
                | RiskKind::HeavyRainfall
                | RiskKind::FloodRisk
                | RiskKind::ColdWave
                | RiskKind::FrostRisk
        )
    }

    #[must_use]
    pub fn advisory(&self) -> &'static RiskAdvisory {
        match self {
            RiskKind::CycloneRisk => &CYCLONE,
            RiskKind::HeatwaveRisk => &HEATWAVE,
            RiskKind::ColdWave => &COLD_WAVE,
            RiskKind::FrostRisk => &FROST,
            RiskKind::HeavyRainfall => &HEAVY_RAINFALL,
            RiskKind::FloodRisk => &FLOOD,
            RiskKind::FogRisk => &FOG,
            RiskKind::HeavySnowfall => &HEAVY_SNOWFALL,
        }
    }
}

/// Bilingual advisory for a regional risk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAdvisory {
    pub kind: RiskKind,
    pub name_en: &'static str,
    pub name_hi: &'static str,
    pub icon: &'static str,
    pub severity: AlertType,
    pub message_en: &'static str,
    pub message_hi: &'static str,
    pub action_en: &'static str,
    pub action_hi: &'static str,
    pub farm_impact_en: &'static str,
    pub farm_impact_hi: &'static str,
}

impl fmt::Display for RiskAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} / {} [{}]", self.icon, self.name_en, self.name_hi, self.severity)?;
        writeln!(f, "   {}", self.message_en)?;
        writeln!(f, "   → {}", self.action_en)?;
        write!(f, "   🌾 {}", self.farm_impact_en)
    }
}

static CYCLONE: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::CycloneRisk,
    name_en: "Cyclone Risk",
    name_hi: "चक्रवात का खतरा",
    icon: "🌀",
    severity: AlertType::Danger,
    message_en: "Cyclone-prone season for this region",
    message_hi: "इस क्षेत्र के लिए चक्रवात-प्रवण मौसम",
    action_en: "Stay alert for weather updates. Secure loose objects. Prepare for strong winds and heavy rain.",
    action_hi: "मौसम अपडेट के लिए सतर्क रहें। ढीली वस्तुओं को सुरक्षित करें। तेज़ हवाओं और भारी बारिश के लिए तैयार रहें।",
    farm_impact_en: "Delay harvesting if crops are ready. Ensure proper drainage. Tie down greenhouse structures.",
    farm_impact_hi: "यदि फसल तैयार है तो कटाई में देरी करें। उचित जल निकासी सुनिश्चित करें।",
};

static HEATWAVE: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::HeatwaveRisk,
    name_en: "Heatwave Alert",
    name_hi: "लू की चेतावनी",
    icon: "🔥",
    severity: AlertType::Warning,
    message_en: "High temperature risk for this month",
    message_hi: "इस महीने उच्च तापमान का खतरा",
    action_en: "Avoid outdoor work during 11 AM - 4 PM. Stay hydrated. Use protective gear.",
    action_hi: "11 बजे से 4 बजे के बीच बाहर काम से बचें। हाइड्रेटेड रहें। सुरक्षात्मक उपकरण का उपयोग करें।",
    farm_impact_en: "Increase irrigation frequency. Water crops early morning or evening. Provide shade for sensitive crops.",
    farm_impact_hi: "सिंचाई की आवृत्ति बढ़ाएं। सुबह या शाम को फसलों को पानी दें। संवेदनशील फसलों के लिए छाया प्रदान करें।",
};

static COLD_WAVE: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::ColdWave,
    name_en: "Cold Wave Warning",
    name_hi: "शीत लहर चेतावनी",
    icon: "❄️",
    severity: AlertType::Warning,
    message_en: "Temperature may drop significantly",
    message_hi: "तापमान में काफी गिरावट हो सकती है",
    action_en: "Protect yourself from cold. Cover crops at night if possible.",
    action_hi: "ठंड से खुद को बचाएं। यदि संभव हो तो रात में फसलों को ढकें।",
    farm_impact_en: "Protect sensitive crops from frost. Delay early morning irrigation. Use smoke to prevent frost damage.",
    farm_impact_hi: "संवेदनशील फसलों को पाले से बचाएं। सुबह जल्दी सिंचाई में देरी करें। पाले की क्षति को रोकने के लिए धुएं का उपयोग करें।",
};

static FROST: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::FrostRisk,
    name_en: "Frost Risk",
    name_hi: "पाला का खतरा",
    icon: "🧊",
    severity: AlertType::Danger,
    message_en: "Frost conditions expected",
    message_hi: "पाला पड़ने की स्थिति संभावित",
    action_en: "Cover young plants. Light controlled fires for warmth in fields.",
    action_hi: "युवा पौधों को ढकें। खेतों में गर्माहट के लिए नियंत्रित आग जलाएं।",
    farm_impact_en: "Critical risk for young plants. Cover crops with plastic sheets. Irrigate lightly before sunset.",
    farm_impact_hi: "युवा पौधों के लिए गंभीर खतरा। फसलों को प्लास्टिक शीट से ढकें। सूर्यास्त से पहले हल्का सिंचाई करें।",
};

static HEAVY_RAINFALL: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::HeavyRainfall,
    name_en: "Heavy Rainfall Expected",
    name_hi: "भारी बारिश की संभावना",
    icon: "🌧️",
    severity: AlertType::Warning,
    message_en: "Monsoon season - expect intense rainfall",
    message_hi: "मानसून का मौसम - तेज बारिश की उम्मीद",
    action_en: "Check drainage systems. Avoid travel during heavy rain.",
    action_hi: "जल निकासी व्यवस्था की जांच करें। भारी बारिश के दौरान यात्रा से बचें।",
    farm_impact_en: "Ensure field drainage. Avoid pesticide spraying. Delay fertilizer application.",
    farm_impact_hi: "खेत की जल निकासी सुनिश्चित करें। कीटनाशक छिड़काव से बचें। उर्वरक के उपयोग में देरी करें।",
};

static FLOOD: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::FloodRisk,
    name_en: "Flood Risk",
    name_hi: "बाढ़ का खतरा",
    icon: "🌊",
    severity: AlertType::Danger,
    message_en: "High flood risk in low-lying areas",
    message_hi: "निचले इलाकों में बाढ़ का उच्च खतरा",
    action_en: "Move to higher ground if water levels rise. Monitor river/canal levels.",
    action_hi: "यदि जल स्तर बढ़े तो ऊंची जगह पर जाएं। नदी/नहर के स्तर की निगरानी करें।",
    farm_impact_en: "Harvest early if possible. Create drainage channels. Move equipment to safe areas.",
    farm_impact_hi: "यदि संभव हो तो जल्दी कटाई करें। जल निकासी चैनल बनाएं। उपकरण को सुरक्षित क्षेत्रों में स्थानांतरित करें।",
};

static FOG: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::FogRisk,
    name_en: "Dense Fog Alert",
    name_hi: "घने कोहरे की चेतावनी",
    icon: "🌫️",
    severity: AlertType::Info,
    message_en: "Visibility may be severely reduced",
    message_hi: "दृश्यता गंभीर रूप से कम हो सकती है",
    action_en: "Drive carefully. Avoid early morning travel if possible.",
    action_hi: "सावधानी से ड्राइव करें। यदि संभव हो तो सुबह की यात्रा से बचें।",
    farm_impact_en: "Delay spraying operations. Wait for fog to clear before field work.",
    farm_impact_hi: "छिड़काव कार्य में देरी करें। खेत के काम से पहले कोहरे के साफ होने की प्रतीक्षा करें।",
};

static HEAVY_SNOWFALL: RiskAdvisory = RiskAdvisory {
    kind: RiskKind::HeavySnowfall,
    name_en: "Snowfall Expected",
    name_hi: "हिमपात की संभावना",
    icon: "🌨️",
    severity: AlertType::Warning,
    message_en: "Heavy snowfall expected in hilly areas",
    message_hi: "पहाड़ी इलाकों में भारी हिमपात की संभावना",
    action_en: "Stock essential supplies. Ensure livestock shelter is secure.",
    action_hi: "आवश्यक आपूर्ति स्टॉक करें। सुनिश्चित करें कि पशुधन आश्रय सुरक्षित है।",
    farm_impact_en: "Protect crops from snow load. Clear snow from greenhouse roofs. Ensure animal warmth.",
    farm_impact_hi: "बर्फ के भार से फसलों की रक्षा करें। ग्रीनहाउस की छतों से बर्फ साफ करें।",
};

use Month::{
    April as Apr, August as Aug, December as Dec, February as Feb, January as Jan, July as Jul,
    June as Jun, May, November as Nov, October as Oct, September as Sep,
};
use RiskKind::{
    ColdWave, CycloneRisk as Cyclone, FloodRisk as Flood, FogRisk as Fog, FrostRisk as Frost,
    HeatwaveRisk as Heat, HeavyRainfall as Rain, HeavySnowfall as Snow,
};

type MonthRisks = &'static [(Month, &'static [RiskKind])];

static STATE_RISK_CALENDAR: &[(&str, MonthRisks)] = &[
    // Coastal, cyclone prone
    (
        "Odisha",
        &[
            (Apr, &[Cyclone]),
            (May, &[Cyclone, Heat]),
            (Jun, &[Cyclone]),
            (Oct, &[Cyclone]),
            (Nov, &[Cyclone]),
            (Dec, &[Cyclone]),
        ],
    ),
    (
        "West Bengal",
        &[
            (Apr, &[Cyclone]),
            (May, &[Cyclone, Heat]),
            (Jun, &[Cyclone]),
            (Oct, &[Cyclone]),
            (Nov, &[Cyclone]),
        ],
    ),
    (
        "Andhra Pradesh",
        &[
            (Apr, &[Cyclone]),
            (May, &[Cyclone, Heat]),
            (Oct, &[Cyclone]),
            (Nov, &[Cyclone]),
            (Dec, &[Cyclone]),
        ],
    ),
    (
        "Tamil Nadu",
        &[
            (Oct, &[Cyclone]),
            (Nov, &[Cyclone]),
            (Dec, &[Cyclone]),
            (Apr, &[Heat]),
            (May, &[Heat]),
        ],
    ),
    (
        "Kerala",
        &[
            (May, &[Cyclone]),
            (Jun, &[Rain]),
            (Jul, &[Rain, Flood]),
            (Aug, &[Rain, Flood]),
            (Sep, &[Rain]),
        ],
    ),
    (
        "Gujarat",
        &[
            (May, &[Cyclone, Heat]),
            (Jun, &[Cyclone, Heat]),
            (Oct, &[Cyclone]),
            (Nov, &[Cyclone]),
        ],
    ),
    (
        "Maharashtra",
        &[
            (Jun, &[Rain]),
            (Jul, &[Rain]),
            (Aug, &[Rain]),
            (Apr, &[Heat]),
            (May, &[Heat]),
        ],
    ),
    // Northern plains, heatwave and cold wave
    (
        "Rajasthan",
        &[
            (Apr, &[Heat]),
            (May, &[Heat]),
            (Jun, &[Heat]),
            (Dec, &[ColdWave]),
            (Jan, &[ColdWave, Frost]),
        ],
    ),
    (
        "Punjab",
        &[
            (May, &[Heat]),
            (Jun, &[Heat]),
            (Dec, &[ColdWave, Fog]),
            (Jan, &[ColdWave, Frost, Fog]),
        ],
    ),
    (
        "Haryana",
        &[
            (May, &[Heat]),
            (Jun, &[Heat]),
            (Dec, &[ColdWave, Fog]),
            (Jan, &[ColdWave, Frost, Fog]),
        ],
    ),
    (
        "Uttar Pradesh",
        &[
            (May, &[Heat]),
            (Jun, &[Heat]),
            (Dec, &[ColdWave, Fog]),
            (Jan, &[ColdWave, Frost, Fog]),
        ],
    ),
    (
        "Delhi",
        &[
            (May, &[Heat]),
            (Jun, &[Heat]),
            (Dec, &[ColdWave, Fog]),
            (Jan, &[ColdWave, Frost, Fog]),
        ],
    ),
    // Northeast, heavy rainfall and floods
    (
        "Assam",
        &[
            (Jun, &[Rain, Flood]),
            (Jul, &[Rain, Flood]),
            (Aug, &[Rain, Flood]),
            (Sep, &[Rain, Flood]),
        ],
    ),
    ("Meghalaya", &[(Jun, &[Rain]), (Jul, &[Rain]), (Aug, &[Rain])]),
    // Central
    (
        "Madhya Pradesh",
        &[
            (Apr, &[Heat]),
            (May, &[Heat]),
            (Jun, &[Heat]),
            (Dec, &[ColdWave]),
        ],
    ),
    ("Chhattisgarh", &[(Apr, &[Heat]), (May, &[Heat]), (Jun, &[Rain])]),
    // East
    (
        "Bihar",
        &[
            (May, &[Heat]),
            (Jun, &[Heat, Flood]),
            (Jul, &[Flood]),
            (Aug, &[Flood]),
            (Dec, &[ColdWave, Fog]),
            (Jan, &[ColdWave, Fog]),
        ],
    ),
    ("Jharkhand", &[(Apr, &[Heat]), (May, &[Heat]), (Jun, &[Heat])]),
    // South
    ("Karnataka", &[(Apr, &[Heat]), (May, &[Heat]), (Jun, &[Rain])]),
    ("Telangana", &[(Apr, &[Heat]), (May, &[Heat])]),
    // Hill states
    (
        "Himachal Pradesh",
        &[(Dec, &[Snow, Frost]), (Jan, &[Snow, Frost]), (Feb, &[Frost])],
    ),
    ("Uttarakhand", &[(Dec, &[Snow, Frost]), (Jan, &[Snow, Frost])]),
];

/// Current local month
#[must_use]
pub fn current_month() -> Month {
    u8::try_from(Local::now().month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .unwrap_or(Month::January)
}

/// Risk kinds active for a state in a month, in calendar order
#[must_use]
pub fn month_risks(state: &str, month: Month) -> &'static [RiskKind] {
    let state = state.trim();
    STATE_RISK_CALENDAR
        .iter()
        .find(|(name, _)| *name == state)
        .and_then(|(_, months)| months.iter().find(|(m, _)| *m == month))
        .map_or(&[], |&(_, risks)| risks)
}

/// Advisories for every risk active in the given state and month
#[must_use]
pub fn state_risk_advisories(state: &str, month: Month) -> Vec<&'static RiskAdvisory> {
    month_risks(state, month)
        .iter()
        .map(RiskKind::advisory)
        .collect()
}

#[must_use]
pub fn risk_summary_en(state: &str, month: Month) -> String {
    let advisories = state_risk_advisories(state, month);
    if advisories.is_empty() {
        return format!("No significant weather risks for {state} this month.");
    }
    let names: Vec<&str> = advisories.iter().map(|a| a.name_en).collect();
    format!("{state} - Active risks: {}", names.join(", "))
}

#[must_use]
pub fn risk_summary_hi(state: &str, month: Month) -> String {
    let advisories = state_risk_advisories(state, month);
    if advisories.is_empty() {
        return format!("{state} के लिए इस महीने कोई महत्वपूर्ण मौसम जोखिम नहीं।");
    }
    let names: Vec<&str> = advisories.iter().map(|a| a.name_hi).collect();
    format!("{state} - सक्रिय जोखिम: {}", names.join(", "))
}
