//! Keyword routing for the conversational weather assistant.
//!
//! Only the deterministic half lives here: deciding what a query is about,
//! pulling a city name out of it, and rendering the weather widget reply.
//! Free-form chat replies need a language model and are left to callers.

use serde::Serialize;

use crate::codes::WeatherCode;
use crate::forecast::{CurrentWeather, Location};

const WEATHER_KEYWORDS: &[&str] = &[
    "weather", "temperature", "temp", "rain", "rainy", "sunny", "cloudy", "wind", "humidity",
    "forecast", "sky", "wethaer", "wheather", "weater", "hot", "cold", "degree", "celcius",
    "fahrenheit",
];

const SUGGESTION_KEYWORDS: &[&str] = &[
    "wear", "outfit", "jacket", "shirt", "dress", "clothing", "suggest", "recommend", "should i",
    "can i go", "clothes", "style", "today's look",
];

/// Words after which a city name is expected, in priority order.
const CITY_MARKERS: &[&str] = &["IN", "AT", "FOR"];

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    LifestyleSuggestion,
    WeatherQuery,
    Chat,
}

/// Classify a query by keyword; clothing/suggestion wording wins over weather wording.
pub fn classify_query(query: &str) -> Intent {
    let query = query.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| query.contains(w));
    if contains_any(SUGGESTION_KEYWORDS) {
        Intent::LifestyleSuggestion
    } else if contains_any(WEATHER_KEYWORDS) {
        Intent::WeatherQuery
    } else {
        Intent::Chat
    }
}

/// Extract an upper-cased city name from a free-form query.
///
/// Looks for the last "IN", "AT" or "FOR" word (in that priority) and takes
/// the remainder up to the first `?`; failing that, whatever follows
/// "WEATHER".
pub fn extract_city(query: &str) -> Option<String> {
    let upper = query.to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();

    let after = |marker: &str| -> Option<String> {
        let pos = words.iter().rposition(|w| *w == marker)?;
        let rest = words[pos + 1..].join(" ");
        let city = rest.split('?').next().unwrap_or_default().trim().to_string();
        (!city.is_empty()).then_some(city)
    };

    CITY_MARKERS
        .iter()
        .find_map(|marker| after(*marker))
        .or_else(|| after("WEATHER"))
}

/// Role of a message in the conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// In-memory conversation history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
    }

    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// A routed query: the intent plus the city it refers to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedQuery {
    pub intent: Intent,
    pub city: Option<String>,
}

/// Route a query; an explicit `city` takes precedence over one found in the text.
pub fn route(query: &str, city: Option<&str>) -> RoutedQuery {
    RoutedQuery {
        intent: classify_query(query),
        city: city
            .map(str::to_string)
            .filter(|c| !c.trim().is_empty())
            .or_else(|| extract_city(query)),
    }
}

/// Compact weather card returned for weather queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherWidget {
    pub city: String,
    pub temp: f64,
    pub wind: f64,
    pub code: WeatherCode,
    pub unit: &'static str,
}

impl WeatherWidget {
    pub const PREFIX: &'static str = "WIDGET_WEATHER:";

    pub fn new(location: &Location, current: &CurrentWeather) -> Self {
        Self {
            city: location.name.clone(),
            temp: current.temperature,
            wind: current.windspeed,
            code: WeatherCode::from(current.weathercode),
            unit: "°C",
        }
    }

    /// `WIDGET_WEATHER:{...}` reply understood by the chat front end.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        Ok(format!("{}{}", Self::PREFIX, serde_json::to_string(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_queries() {
        assert_eq!(classify_query("What should I wear today?"), Intent::LifestyleSuggestion);
        assert_eq!(classify_query("How is the weather?"), Intent::WeatherQuery);
        assert_eq!(classify_query("Hello how are you?"), Intent::Chat);
        assert_eq!(classify_query("Is it cold enough for a jacket?"), Intent::LifestyleSuggestion);
    }

    #[test]
    fn extracts_city_after_markers() {
        assert_eq!(extract_city("what's the weather in Paris?").as_deref(), Some("PARIS"));
        assert_eq!(extract_city("temperature at new york").as_deref(), Some("NEW YORK"));
        assert_eq!(extract_city("forecast for san jose? thanks").as_deref(), Some("SAN JOSE"));
        assert_eq!(extract_city("weather london").as_deref(), Some("LONDON"));
        assert_eq!(extract_city("is it raining"), None);
    }

    #[test]
    fn marker_priority_follows_in_at_for() {
        // "IN" wins even though "FOR" appears later.
        assert_eq!(
            extract_city("weather in Oslo for tomorrow").as_deref(),
            Some("OSLO FOR TOMORROW")
        );
    }

    #[test]
    fn explicit_city_overrides_text() {
        let routed = route("weather in Paris", Some("Pune"));
        assert_eq!(routed.intent, Intent::WeatherQuery);
        assert_eq!(routed.city.as_deref(), Some("Pune"));
        assert_eq!(route("weather in Paris", Some("  ")).city.as_deref(), Some("PARIS"));
    }

    #[test]
    fn conversation_history_and_clear() {
        let mut conversation = Conversation::default();
        conversation.push(Role::User, "hi");
        conversation.push(Role::Assistant, "HELLO");
        assert_eq!(conversation.history().len(), 2);
        assert_eq!(conversation.history()[1].role, Role::Assistant);
        conversation.clear();
        assert!(conversation.history().is_empty());
    }

    #[test]
    fn widget_renders_prefixed_json() {
        let location = Location {
            name: "Mumbai".into(),
            country: None,
            latitude: 0.0,
            longitude: 0.0,
            timezone: None,
        };
        let current = CurrentWeather {
            temperature: 30.5,
            windspeed: 10.0,
            weathercode: 3,
            ..CurrentWeather::default()
        };
        let rendered = WeatherWidget::new(&location, &current).render().unwrap();
        assert_eq!(
            rendered,
            r#"WIDGET_WEATHER:{"city":"Mumbai","temp":30.5,"wind":10.0,"code":3,"unit":"°C"}"#
        );
    }
}
