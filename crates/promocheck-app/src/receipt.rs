use anyhow::Context;
use promocheck_domain::EligibilityError;
use promocheck_types::{EligibilityReceipt, ErrorInfo, SCHEMA_ELIGIBILITY_V1, ToolMeta, ids};
use time::OffsetDateTime;

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "promocheck".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Render the full error chain on one line (`outer: inner: root`).
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        msg.push_str(": ");
        msg.push_str(&e.to_string());
        cur = e.source();
    }
    msg
}

pub fn build_receipt(
    code: &str,
    outcome: &Result<bool, EligibilityError>,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> EligibilityReceipt {
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;
    let (eligible, error) = match outcome {
        Ok(eligible) => (*eligible, None),
        Err(err) => (
            false,
            Some(ErrorInfo {
                id: err.id().to_string(),
                message: error_chain(err),
            }),
        ),
    };
    EligibilityReceipt {
        schema: SCHEMA_ELIGIBILITY_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        duration_ms,
        code: code.to_string(),
        eligible,
        error,
    }
}

/// Receipt for failures outside the engine (bad config and the like).
pub fn runtime_error_receipt(code: &str, message: &str) -> EligibilityReceipt {
    let now = OffsetDateTime::now_utc();
    EligibilityReceipt {
        schema: SCHEMA_ELIGIBILITY_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        duration_ms: 0,
        code: code.to_string(),
        eligible: false,
        error: Some(ErrorInfo {
            id: ids::ERR_RUNTIME.to_string(),
            message: message.to_string(),
        }),
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_receipt(receipt: &EligibilityReceipt) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(receipt).context("serialize receipt")?;
    out.push('\n');
    Ok(out)
}
