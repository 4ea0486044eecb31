use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A store mutation with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramEvent {
    pub timestamp: DateTime<Utc>,
    pub event: EventType,
}

impl DiagramEvent {
    /// Create a new event with the current timestamp
    pub fn new(event: EventType) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }

    /// Create a new event with a specific timestamp
    pub fn with_timestamp(timestamp: DateTime<Utc>, event: EventType) -> Self {
        Self { timestamp, event }
    }
}

/// Types of mutations applied to the diagram store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventType {
    NodeAdded {
        id: String,
        x: f32,
        y: f32,
    },

    EdgeAdded {
        id: String,
        from: String,
        to: String,
    },

    /// Logged for every applied position write; ignored writes log nothing
    NodeMoved {
        id: String,
        x: f32,
        y: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = DiagramEvent::new(EventType::NodeAdded {
            id: "stateA".to_string(),
            x: 100.0,
            y: 200.0,
        });

        assert!(event.timestamp <= Utc::now());
    }

    #[test]
    fn test_event_serialization() {
        let event = DiagramEvent::new(EventType::EdgeAdded {
            id: "e1".to_string(),
            from: "stateA".to_string(),
            to: "stateB".to_string(),
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DiagramEvent = serde_json::from_str(&json).unwrap();

        match (&event.event, &deserialized.event) {
            (
                EventType::EdgeAdded { from: f1, to: t1, .. },
                EventType::EdgeAdded { from: f2, to: t2, .. },
            ) => {
                assert_eq!(f1, f2);
                assert_eq!(t1, t2);
            }
            _ => panic!("Event type mismatch"),
        }
    }
}
