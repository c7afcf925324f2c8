//!  Tripmate Travel Planner
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! The four agents of the travel desk and the tools each one may call.

use crate::config::AppConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub name: &'static str,
    pub model: String,
    pub description: &'static str,
    pub instruction: &'static str,
    pub tools: &'static [&'static str],
}

pub const FLIGHT_AGENT: &str = "flight_booking_agent";
pub const HOTEL_AGENT: &str = "hotel_booking_agent";
pub const ACTIVITIES_AGENT: &str = "activities_booking_agent";
pub const PLANNER_AGENT: &str = "travel_planner_super_agent";

const PLANNER_INSTRUCTION: &str = "You are an expert travel planner who helps users create comprehensive travel plans. \
You coordinate between flight booking, hotel reservations, and activity planning to provide \
complete itineraries. You can:\n\n\
1. Create full travel plans with flights, accommodation, and activities\n\
2. Work within specified budgets and preferences\n\
3. Provide cost breakdowns and budget analysis\n\
4. Compare multiple destinations to help users decide\n\
5. Suggest activities based on interests (adventure, cultural, culinary, etc.)\n\
6. Give travel recommendations and tips\n\n\
Always consider user preferences, budget constraints, and trip duration when making recommendations. \
Provide detailed explanations for your suggestions and offer alternative options when possible. \
Be helpful, informative, and ensure all recommendations are practical and well-reasoned.";

pub fn planner_instruction() -> &'static str {
    PLANNER_INSTRUCTION
}

pub fn agent_profiles(config: &AppConfig) -> Vec<AgentProfile> {
    let model = config.model_name.clone();
    vec![
        AgentProfile {
            name: FLIGHT_AGENT,
            model: model.clone(),
            description: "Flight booking agent that can search for flights between cities across India.",
            instruction: "You are a helpful flight booking agent who specializes in finding flights between cities. \
When users ask about flights, provide them with available options including flight numbers, \
departure/arrival times, prices, and airlines. Help users find the best flight options \
based on their travel preferences, budget, and schedule. Always be helpful and provide \
clear information about available flight options.",
            tools: &["search_flights"],
        },
        AgentProfile {
            name: HOTEL_AGENT,
            model: model.clone(),
            description: "Hotel booking agent that can search for accommodations across tourist cities in India.",
            instruction: "You are a helpful hotel booking agent who specializes in finding accommodations. \
When users ask about hotels, show them available accommodations with ratings, prices, \
amenities, and locations. You can apply filters like price range and minimum rating. \
Provide detailed information about hotel amenities, locations, and help users choose \
the best option based on their preferences and budget. Always be helpful and informative.",
            tools: &["search_hotels"],
        },
        AgentProfile {
            name: ACTIVITIES_AGENT,
            model: model.clone(),
            description: "Activities booking agent that can search for activities and experiences in tourist cities across India.",
            instruction: "You are a helpful activities booking agent. When users ask about activities in a city, \
always show them the complete list of activities first using search_activities(city) with no filters. \
Each city has 4-5 carefully curated activities with ratings (1-5 stars) and prices. \
Only apply rating or price filters if the user specifically asks for them (e.g., 'show me activities with 4+ stars' or 'under ₹2000'). \
Always display the activity name, category, duration, price, rating, and description clearly. \
Keep your responses simple and focused on the activities available.",
            tools: &["search_activities", "get_all_activities", "get_activities_by_category"],
        },
        AgentProfile {
            name: PLANNER_AGENT,
            model,
            description: "Comprehensive travel planning agent that coordinates flights, hotels, and activities to create \
complete travel itineraries. Specializes in Indian destinations and provides budget-aware recommendations.",
            instruction: PLANNER_INSTRUCTION,
            tools: &[
                "create_comprehensive_travel_plan",
                "search_destination_activities",
                "get_travel_inspiration",
                "compare_destinations",
                "search_flights",
                "search_hotels",
                "search_activities",
                "get_activities_by_category",
            ],
        },
    ]
}

/// The agent that primarily owns a tool, for interaction logs.
pub fn tool_owner(tool: &str) -> &'static str {
    match tool {
        "search_flights" => FLIGHT_AGENT,
        "search_hotels" => HOTEL_AGENT,
        "search_activities" | "get_all_activities" | "get_activities_by_category" => ACTIVITIES_AGENT,
        _ => PLANNER_AGENT,
    }
}
