//! Reading missions and writing reports.

use std::path::Path;

use rover_core::{Arena, Heading, Instruction, Mission, Position, Report, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{ClientError, Result};

/// Drains `input` to completion as UTF-8.
pub async fn read_input<R>(mut input: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut raw = String::new();
    let bytes = input
        .read_to_string(&mut raw)
        .await
        .map_err(ClientError::ReadInput)?;

    tracing::debug!("Read {} bytes of input", bytes);

    if raw.trim().is_empty() {
        return Err(ClientError::EmptyInput);
    }

    Ok(raw)
}

/// Mission as it arrives on stdin.
///
/// `directions` entries may be any JSON value. They are kept raw so the
/// report path can echo them back exactly as received.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MissionDocument {
    arena: Arena,
    location: Position,
    heading: Heading,
    directions: Vec<Value>,
}

impl MissionDocument {
    pub fn mission(&self) -> Mission {
        Mission::new(self.arena, self.location, self.heading)
            .with_directions(self.directions.iter().map(instruction_from_value))
    }

    /// Raw entries consumed by `report`, in input order.
    pub fn consumed(&self, report: &Report) -> &[Value] {
        let len = report.path.len().min(self.directions.len());
        &self.directions[..len]
    }
}

/// Non-string entries can never name an instruction.
fn instruction_from_value(value: &Value) -> Instruction {
    match value {
        Value::String(raw) => Instruction::from(raw.as_str()),
        other => Instruction::Unrecognized(other.to_string()),
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    status: Status,
    location: Position,
    heading: Heading,
    path: &'a [Value],
}

pub fn decode_mission(raw: &str) -> Result<MissionDocument> {
    serde_json::from_str(raw).map_err(ClientError::ParseInput)
}

pub fn encode_report(report: &Report, mission: &MissionDocument, pretty: bool) -> Result<String> {
    let document = ReportDocument {
        status: report.status,
        location: report.location,
        heading: report.heading,
        path: mission.consumed(report),
    };
    let encoded = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    encoded.map_err(ClientError::Encode)
}

/// Writes the encoded report, replacing any existing file.
pub async fn write_output(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ClientError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote report to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::simulate;

    #[tokio::test]
    async fn read_input_rejects_blank_stream() {
        let result = read_input(&b"  \n\t"[..]).await;

        assert!(matches!(result, Err(ClientError::EmptyInput)));
    }

    #[tokio::test]
    async fn read_input_rejects_invalid_utf8() {
        let result = read_input(&b"\xff\xfe{"[..]).await;

        assert!(matches!(result, Err(ClientError::ReadInput(_))));
    }

    #[test]
    fn decode_reports_schema_errors() {
        let missing_arena = r#"{"location":{"x":0,"y":0},"heading":"north","directions":[]}"#;
        let bad_heading = r#"{"arena":{"corner1":{"x":0,"y":0},"corner2":{"x":1,"y":1}},
            "location":{"x":0,"y":0},"heading":"up","directions":[]}"#;

        assert!(matches!(
            decode_mission(missing_arena),
            Err(ClientError::ParseInput(_))
        ));
        assert!(matches!(
            decode_mission(bad_heading),
            Err(ClientError::ParseInput(_))
        ));
        assert!(matches!(
            decode_mission("{not json"),
            Err(ClientError::ParseInput(_))
        ));
    }

    #[test]
    fn non_string_directions_are_unrecognized() {
        let document = decode_mission(
            r#"{"arena":{"corner1":{"x":0,"y":0},"corner2":{"x":5,"y":5}},
                "location":{"x":2,"y":2},"heading":"north",
                "directions":["forward", 3, null, {"go": 1}, "left"]}"#,
        )
        .unwrap();

        let mission = document.mission();

        assert_eq!(
            mission.directions,
            vec![
                Instruction::Forward,
                Instruction::Unrecognized("3".into()),
                Instruction::Unrecognized("null".into()),
                Instruction::Unrecognized(r#"{"go":1}"#.into()),
                Instruction::Left,
            ]
        );
    }

    #[test]
    fn report_echoes_raw_directions() {
        let document = decode_mission(
            r#"{"arena":{"corner1":{"x":0,"y":0},"corner2":{"x":5,"y":5}},
                "location":{"x":2,"y":2},"heading":"north",
                "directions":["forward", 3, "left"]}"#,
        )
        .unwrap();
        let report = simulate(&document.mission());

        let encoded = encode_report(&report, &document, false).unwrap();

        assert_eq!(report.status, Status::Error);
        assert_eq!(
            encoded,
            r#"{"status":"error","location":{"x":2,"y":3},"heading":"north","path":["forward",3]}"#
        );
    }

    #[test]
    fn encodes_compact_and_pretty() {
        let document = decode_mission(
            r#"{"arena":{"corner1":{"x":0,"y":0},"corner2":{"x":2,"y":2}},
                "location":{"x":1,"y":1},"heading":"north","directions":["right","forward"]}"#,
        )
        .unwrap();
        let report = simulate(&document.mission());

        let compact = encode_report(&report, &document, false).unwrap();
        let pretty = encode_report(&report, &document, true).unwrap();

        assert_eq!(
            compact,
            r#"{"status":"ok","location":{"x":2,"y":1},"heading":"east","path":["right","forward"]}"#
        );
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&pretty).unwrap(),
            serde_json::from_str::<Value>(&compact).unwrap()
        );
    }
}
