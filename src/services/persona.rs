//! Persona instruction for the guide session.
//!
//! DESIGN
//! ======
//! The itinerary is kept as data and rendered into the instruction once per
//! session, so the facts the model is told and the facts shown elsewhere on
//! the site come from one table.

struct Stop {
    time: &'static str,
    activity: &'static str,
}

struct Day {
    label: &'static str,
    stops: &'static [Stop],
}

const ITINERARY: &[Day] = &[
    Day { label: "Day 1", stops: &[Stop { time: "07:30 PM", activity: "Bus departs from college." }] },
    Day {
        label: "Day 2 (Munnar)",
        stops: &[
            Stop { time: "07:00 AM", activity: "Room Check-in." },
            Stop { time: "08:00 AM", activity: "Breakfast." },
            Stop {
                time: "09:00 AM",
                activity: "Sightseeing (Forest Garden, Photo Point, Honey Bee Tree, Elephant Ride, Botanical Garden, \
                           Tea Factory Visit, Mattupetty Dam, Shooting Point, Echo Point, Tribal Village, Kundala Lake, \
                           Top Station).",
            },
            Stop { time: "05:00 PM", activity: "Munnar Local Shopping." },
            Stop { time: "07:00 PM", activity: "Campfire & Stay at Hotel." },
        ],
    },
    Day {
        label: "Day 3 (Industry & Kochi)",
        stops: &[
            Stop { time: "04:00 AM", activity: "Early Morning Start." },
            Stop { time: "09:00 AM", activity: "Breakfast." },
            Stop { time: "10:00 AM", activity: "Industrial Visit." },
            Stop {
                time: "12:00 PM",
                activity: "Kochi Sightseeing (Hill Palace, Chottanikkara Temple, Vypin Beach, Ferry Boat on Bus, \
                           Marine Drive Boating covering Harbor/Mattancherry/Sea Entrance/Bolgatty Island, Lulu Mall).",
            },
            Stop { time: "Night", activity: "Stay at Cochin." },
        ],
    },
    Day {
        label: "Day 4 (Wonderla)",
        stops: &[
            Stop { time: "07:00 AM", activity: "Hotel Checkout." },
            Stop { time: "08:00 AM", activity: "Breakfast." },
            Stop { time: "10:00 AM", activity: "Wonderla Entry (Amusement Park)." },
            Stop { time: "07:00 PM", activity: "Wonderla Checkout." },
            Stop { time: "09:00 PM", activity: "Depart to College." },
        ],
    },
    Day { label: "Day 5", stops: &[Stop { time: "Morning", activity: "Arrival at College." }] },
];

const EXTRA_CHARGES: &str = "Extra charges may apply for entry tickets and rides at specific locations \
                             (e.g., Elephant Ride, Gardens, etc.). These must be paid by students.";

/// Render the fixed instruction the guide session is created with.
#[must_use]
pub fn build_persona() -> String {
    let mut out = String::from(
        "You are the friendly and knowledgeable AI assistant for \"Inteleza '26\", \
         the Industrial Visit for the Department of AI&DS and IT.\n\nHere is the official Itinerary:\n",
    );

    for day in ITINERARY {
        out.push_str(&format!("{}:\n", day.label));
        for stop in day.stops {
            out.push_str(&format!("  {}: {}\n", stop.time, stop.activity));
        }
    }
    out.push_str(&format!("\nIMPORTANT DISCLAIMER: {EXTRA_CHARGES}\n"));

    out.push_str(
        "\nStyle: Keep answers concise, helpful, and energetic (neon-themed vibe).\n\
         If asked about costs for rides/entry, strictly mention the disclaimer that extra charges apply.\n\
         Do not answer questions unrelated to the trip, Kerala, or general travel advice.\n",
    );
    out
}

#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;
