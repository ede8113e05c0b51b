//! Honest job titles: what a resume sounds like once decoded.

use rand::seq::SliceRandom;

pub const VIBES: &[(&str, &[&str])] = &[
    (
        "general",
        &[
            "Chaos Coordinator",
            "Underpaid Overachiever",
            "VP of Vibes",
            "Director of Making It Look Like It Works",
            "Email Apology Specialist",
            "Meeting Escape Artist",
            "Office Plant Watering Consultant",
            "Corporate Shrug Machine",
            "Slide Deck Sorcerer",
            "Team Morale Micro-Manager",
        ],
    ),
    (
        "tech",
        &[
            "Buzzword Alchemist",
            "Full-Stack Blame Magnet",
            "Legacy System Whisperer",
            "Agile-ish Evangelist",
            "404 Solution Not Found Engineer",
            "DevOps Firefighter",
            "Backlog Evangelist",
            "Container Whisperer",
            "Junior Senior Architect",
            "Infinite Sprint Participant",
        ],
    ),
    (
        "corporate",
        &[
            "PowerPoint Necromancer",
            "Crisis Response Specialist",
            "Professional Time Blocker",
            "Middle Management Martyr",
            "Quarterly Goal Mumbler",
            "Synergy Czar",
            "KPI Dream Weaver",
            "Watercooler Strategist",
            "Budget Overpromise Coordinator",
            "Reorg Enthusiast",
        ],
    ),
    (
        "creative",
        &[
            "Brand Wizard",
            "Pixel Pusher-in-Chief",
            "Aesthetic Optimization Engineer",
            "Vibe Strategist",
            "Moodboard Magician",
            "Chief Canva Officer",
            "Logo Iteration Lead",
            "Color Theory Theorist",
            "Style Guide Enforcer",
            "Typography Whisperer",
        ],
    ),
    (
        "burnout",
        &[
            "Late-Stage Capitalism Survivor",
            "Mental Gymnastics Champion",
            "Email Ninja with Carpal Tunnel",
            "Coffee-Driven Doer of All Things",
            "Zoom Fatigue Analyst",
            "Dead Inside but Still Responsive",
            "Burnout Brand Ambassador",
            "Self-Care Reminder Ignorer",
            "Remote Work Existentialist",
            "Lunch-Skipping Productivity Hero",
        ],
    ),
];

/// Seriousness tiers: 0 is chaotic satire, 3 is a plausible parody.
pub const TIERS: [&[&str]; 4] = [
    &[
        "Professional Apologizer",
        "Wizard of Winging It",
        "Just Happy to Be Included",
        "Excel Cell Sorcerer",
        "Dream Crusher Intern",
        "Google Docs Gladiator",
        "Panic Mode Project Manager",
        "Last Minute Hero",
        "Slack Emoji Interpreter",
        "Desk Plant Psychologist",
    ],
    &[
        "Senior Alignment Specialist",
        "Cross-Functional Liaison",
        "Employee of the Month (Pending)",
        "Strategic Delay Coordinator",
        "Workflow Navigator",
        "Email Chain Archaeologist",
        "Morale Management Analyst",
        "Interdepartmental Peacekeeper",
        "Data Formatting Champion",
        "Influence Without Authority Specialist",
    ],
    &[
        "People-First Process Designer",
        "Efficiency Enhancement Lead",
        "Head of Making It Work Somehow",
        "Results Optimization Analyst",
        "Operational Insights Coordinator",
        "Collaboration Strategy Advisor",
        "Resource Forecast Engineer",
        "Performance Mapping Facilitator",
        "Execution Experience Consultant",
        "Goals-to-Reality Translator",
    ],
    &[
        "Resume Realist",
        "Narrative Reframing Officer",
        "Language Optimization Analyst",
        "Experience Framing Specialist",
        "Professional Impact Designer",
        "Role Description Architect",
        "Talent Positioning Consultant",
        "Strategic Storytelling Lead",
        "Career Messaging Advisor",
        "Qualifications Branding Partner",
    ],
];

/// A valid tier wins over a vibe; with neither, any vibe title is fair game.
pub fn generate_title(vibe: Option<&str>, tier: Option<usize>) -> &'static str {
    let mut rng = rand::thread_rng();

    if let Some(pool) = tier.and_then(|t| TIERS.get(t)) {
        if let Some(title) = pool.choose(&mut rng) {
            return *title;
        }
    }

    if let Some(pool) = vibe.and_then(|v| {
        VIBES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(v))
            .map(|(_, titles)| *titles)
    }) {
        if let Some(title) = pool.choose(&mut rng) {
            return *title;
        }
    }

    let all: Vec<&'static str> = VIBES
        .iter()
        .flat_map(|(_, titles)| titles.iter().copied())
        .collect();
    all.choose(&mut rng).copied().unwrap_or("Chaos Coordinator")
}
