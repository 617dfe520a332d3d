//! Drop reports from the gesture layer.
//!
//! The gesture layer reports `(sourceType, sourceId, destinationId, edge)`
//! after hit-testing; this module turns that report into a move action.

use super::actions::Action;
use super::engine::{BoardEngine, Dispatched};
use crate::model::edge::{ColumnEdge, DropEdge, TaskEdge};
use crate::repo::BoardStore;
use serde::{Deserialize, Deserializer};

/// Kind of item being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragSource {
    Task,
    Column,
}

/// One completed drop gesture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub source_type: DragSource,
    pub source_id: String,
    pub destination_id: String,
    /// Closest edge of the destination; `None` when absent or unrecognized.
    #[serde(default, deserialize_with = "lenient_edge")]
    pub edge: Option<DropEdge>,
}

impl DropEvent {
    pub fn task(
        source_id: impl Into<String>,
        destination_id: impl Into<String>,
        edge: Option<DropEdge>,
    ) -> Self {
        Self {
            source_type: DragSource::Task,
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            edge,
        }
    }

    pub fn column(
        source_id: impl Into<String>,
        destination_id: impl Into<String>,
        edge: Option<DropEdge>,
    ) -> Self {
        Self {
            source_type: DragSource::Column,
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            edge,
        }
    }

    /// Parses the JSON drop report.
    ///
    /// # Errors
    /// - Returns the parse error for malformed JSON or an unknown source type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Maps the drop to a move. A missing edge falls back to `bottom` for
    /// tasks and `right` for columns.
    pub fn into_action(self) -> Action {
        match self.source_type {
            DragSource::Task => Action::MoveTask {
                task_id: self.source_id,
                target_task_id: self.destination_id,
                edge: TaskEdge::from_drop(self.edge),
            },
            DragSource::Column => Action::MoveColumn {
                column_id: self.source_id,
                target_column_id: self.destination_id,
                edge: ColumnEdge::from_drop(self.edge),
            },
        }
    }
}

fn lenient_edge<'de, D>(deserializer: D) -> Result<Option<DropEdge>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(DropEdge::parse))
}

impl<S: BoardStore> BoardEngine<S> {
    /// Applies a drop report as a task or column move.
    pub fn handle_drop(&mut self, event: DropEvent) -> Dispatched {
        self.dispatch(event.into_action())
    }
}

#[cfg(test)]
mod tests {
    use super::{DragSource, DropEvent};
    use crate::model::edge::{ColumnEdge, DropEdge, TaskEdge};
    use crate::service::actions::Action;

    #[test]
    fn parses_collaborator_shape() {
        let event = DropEvent::from_json(
            r#"{"sourceType":"task","sourceId":"t1","destinationId":"t2","edge":"top"}"#,
        )
        .expect("drop should parse");
        assert_eq!(event.source_type, DragSource::Task);
        assert_eq!(event.edge, Some(DropEdge::Top));
    }

    #[test]
    fn null_missing_and_unknown_edges_become_none() {
        for text in [
            r#"{"sourceType":"column","sourceId":"a","destinationId":"b","edge":null}"#,
            r#"{"sourceType":"column","sourceId":"a","destinationId":"b"}"#,
            r#"{"sourceType":"column","sourceId":"a","destinationId":"b","edge":"diagonal"}"#,
        ] {
            let event = DropEvent::from_json(text).expect("drop should parse");
            assert_eq!(event.edge, None, "{text}");
        }
    }

    #[test]
    fn unknown_source_type_is_rejected() {
        let result = DropEvent::from_json(
            r#"{"sourceType":"board","sourceId":"a","destinationId":"b","edge":null}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_edge_defaults_to_trailing_edge() {
        assert_eq!(
            DropEvent::task("t1", "t2", None).into_action(),
            Action::MoveTask {
                task_id: "t1".to_string(),
                target_task_id: "t2".to_string(),
                edge: TaskEdge::Bottom,
            }
        );
        assert_eq!(
            DropEvent::column("a", "b", None).into_action(),
            Action::MoveColumn {
                column_id: "a".to_string(),
                target_column_id: "b".to_string(),
                edge: ColumnEdge::Right,
            }
        );
    }

    #[test]
    fn cross_axis_edge_falls_back_to_trailing_edge() {
        assert_eq!(
            DropEvent::task("t1", "t2", Some(DropEdge::Left)).into_action(),
            Action::MoveTask {
                task_id: "t1".to_string(),
                target_task_id: "t2".to_string(),
                edge: TaskEdge::Bottom,
            }
        );
    }
}
