//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text metrics engine to AI assistants over stdio. Each tool is a
//! thin wrapper around the core library: it takes the document as a string,
//! runs the same analysis the CLI runs, and returns pretty-printed JSON.
//!
//! The server holds the analysis options resolved from configuration at
//! startup, so stop words and list lengths match the CLI.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use textmetrics_core::metrics;
use textmetrics_core::oracle::{FixedOracle, LanguageDetection, Oracle, SentimentScores};
use textmetrics_core::{AnalysisOptions, UnavailableOracle, analyze, text};

use crate::commands::check_input_size;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Language code (e.g. "en") if the caller already knows it.
    pub language_code: Option<String>,
    /// Sentiment polarity in [-1, 1] if the caller has scored it.
    pub polarity: Option<f64>,
    /// Sentiment subjectivity in [0, 1] if the caller has scored it.
    pub subjectivity: Option<f64>,
    /// Length of the ranked word and letter lists.
    pub top: Option<usize>,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Minimum acceptable Flesch score (0-100).
    pub min_score: Option<f64>,
}

/// Parameters for the `word_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequencyParams {
    /// The text to analyze.
    pub text: String,
    /// Number of words to list.
    pub top: Option<usize>,
    /// Extra stop words to exclude for this call.
    pub extra_stopwords: Option<Vec<String>>,
}

/// Answers from the caller, used in place of a language/sentiment model.
///
/// Any field left unset fails like [`UnavailableOracle`] and takes the
/// engine's fallback.
struct CallerOracle {
    language: Option<LanguageDetection>,
    sentiment: Option<SentimentScores>,
}

impl CallerOracle {
    fn from_params(params: &AnalyzeTextParams) -> Box<dyn Oracle> {
        let sentiment = match (params.polarity, params.subjectivity) {
            (None, None) => None,
            (polarity, subjectivity) => Some(SentimentScores {
                polarity: polarity.unwrap_or(0.0),
                subjectivity: subjectivity.unwrap_or(0.0),
            }),
        };
        match (&params.language_code, sentiment) {
            (None, None) => Box::new(UnavailableOracle),
            (Some(code), Some(scores)) => Box::new(FixedOracle::new(code, scores)),
            (code, sentiment) => Box::new(Self {
                language: code.as_deref().map(LanguageDetection::from_code),
                sentiment,
            }),
        }
    }
}

impl Oracle for CallerOracle {
    fn detect_language(
        &self,
        text: &str,
    ) -> textmetrics_core::OracleResult<LanguageDetection> {
        self.language
            .clone()
            .map_or_else(|| UnavailableOracle.detect_language(text), Ok)
    }

    fn score_sentiment(&self, text: &str) -> textmetrics_core::OracleResult<SentimentScores> {
        self.sentiment
            .map_or_else(|| UnavailableOracle.score_sentiment(text), Ok)
    }
}

/// MCP server exposing the text metrics engine.
#[derive(Clone)]
pub struct TextMetricsServer {
    options: Arc<AnalysisOptions>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for TextMetricsServer {
    fn default() -> Self {
        Self::new(
            AnalysisOptions::default(),
            Some(textmetrics_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl TextMetricsServer {
    /// Create a server that analyzes with the given options.
    pub fn new(options: AnalysisOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            options: Arc::new(options),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full analysis report.
    #[tool(
        description = "Analyze text: basic counts, word and letter frequency, Flesch readability, and sentence lengths. Pass language_code, polarity, and subjectivity if known; otherwise those fields report fallback values."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", top = ?params.top, "executing MCP tool");
        self.check_size(&params.text)?;

        let options = match params.top {
            Some(n) => AnalysisOptions {
                top_words: n,
                top_letters: n,
                ..(*self.options).clone()
            },
            None => (*self.options).clone(),
        };
        let oracle = CallerOracle::from_params(&params);
        let report = analyze(&params.text, &options, oracle.as_ref());

        tracing::info!(
            tool = "analyze_text",
            words = report.basic_stats.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &report,
        )?)]))
    }

    /// Flesch Reading Ease only.
    #[tool(
        description = "Score readability with Flesch Reading Ease (0-100, higher is easier). Returns score, level, and syllable count."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", min_score = ?params.min_score, "executing MCP tool");
        self.check_size(&params.text)?;

        let tokens = text::tokenize(&params.text);
        let score = metrics::readability(&tokens.words, tokens.sentence_count());
        let below_min = params
            .min_score
            .is_some_and(|min| score.flesch_score < min);

        let mut value = serde_json::to_value(&score)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("below_min".to_string(), serde_json::Value::Bool(below_min));
        }

        tracing::info!(
            tool = "check_readability",
            flesch = score.flesch_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &value,
        )?)]))
    }

    /// Ranked content words.
    #[tool(
        description = "Rank the most frequent content words, excluding stop words and non-alphabetic tokens."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn word_frequency(
        &self,
        Parameters(params): Parameters<WordFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_frequency", top = ?params.top, "executing MCP tool");
        self.check_size(&params.text)?;

        let mut stopwords = self.options.stopwords.clone();
        if let Some(ref extra) = params.extra_stopwords {
            stopwords.extend(extra);
        }
        let words = text::extract_words(&params.text);
        let report = metrics::word_frequency(
            &words,
            &stopwords,
            params.top.unwrap_or(self.options.top_words),
        );

        tracing::info!(
            tool = "word_frequency",
            unique = report.unique_words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &report,
        )?)]))
    }
}

#[tool_handler]
impl ServerHandler for TextMetricsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for a full report, or check_readability and word_frequency for a single metric.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use textmetrics_core::StopWords;

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    fn analyze_params(text: &str) -> AnalyzeTextParams {
        AnalyzeTextParams {
            text: text.to_string(),
            language_code: None,
            polarity: None,
            subjectivity: None,
            top: None,
        }
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = TextMetricsServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = TextMetricsServer::default();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: default_format(),
            }))
            .expect("get_info should succeed");

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = TextMetricsServer::default();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");

        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn analyze_text_without_oracle_answers_falls_back() {
        let server = TextMetricsServer::default();
        let result = server
            .analyze_text(Parameters(analyze_params("Cats run. Dogs run fast!")))
            .expect("analyze_text should succeed");

        let json = json_of(&result);
        assert_eq!(json["basic_stats"]["word_count"], 5);
        assert_eq!(json["basic_stats"]["sentence_count"], 2);
        assert_eq!(json["language_detection"]["detected_language"], "unknown");
        assert_eq!(json["sentiment_analysis"]["sentiment"], "neutral");
    }

    #[test]
    fn analyze_text_uses_caller_answers() {
        let server = TextMetricsServer::default();
        let params = AnalyzeTextParams {
            language_code: Some("de".to_string()),
            polarity: Some(-0.5),
            subjectivity: Some(0.75),
            ..analyze_params("Der Hund schläft.")
        };
        let json = json_of(&server.analyze_text(Parameters(params)).unwrap());
        assert_eq!(json["language_detection"]["language_name"], "German");
        assert_eq!(json["sentiment_analysis"]["sentiment"], "negative");
        assert_eq!(json["sentiment_analysis"]["polarity_percentage"], 25.0);
    }

    #[test]
    fn analyze_text_language_only() {
        let server = TextMetricsServer::default();
        let params = AnalyzeTextParams {
            language_code: Some("ja".to_string()),
            ..analyze_params("Some text.")
        };
        let json = json_of(&server.analyze_text(Parameters(params)).unwrap());
        assert_eq!(json["language_detection"]["language_name"], "Japanese");
        assert_eq!(json["sentiment_analysis"]["polarity"], 0.0);
    }

    #[test]
    fn analyze_text_out_of_range_sentiment_falls_back() {
        let server = TextMetricsServer::default();
        let params = AnalyzeTextParams {
            polarity: Some(4.0),
            ..analyze_params("Some text.")
        };
        let json = json_of(&server.analyze_text(Parameters(params)).unwrap());
        assert_eq!(json["sentiment_analysis"]["polarity_percentage"], 50.0);
    }

    #[test]
    fn analyze_text_rejects_oversized_input() {
        let server = TextMetricsServer::new(AnalysisOptions::default(), Some(4));
        assert!(server.analyze_text(Parameters(analyze_params("too long"))).is_err());
    }

    #[test]
    fn check_readability_tool_works() {
        let server = TextMetricsServer::default();
        let result = server
            .check_readability(Parameters(CheckReadabilityParams {
                text: "The cat sat on the mat. The dog ran fast.".to_string(),
                min_score: Some(50.0),
            }))
            .expect("check_readability should succeed");

        let json = json_of(&result);
        assert!(json["flesch_score"].as_f64().unwrap() > 50.0);
        assert_eq!(json["readability_level"], "very easy");
        assert_eq!(json["below_min"], false);
    }

    #[test]
    fn word_frequency_tool_works() {
        let server = TextMetricsServer::new(
            AnalysisOptions {
                stopwords: StopWords::english(),
                top_words: 2,
                top_letters: 2,
            },
            None,
        );
        let result = server
            .word_frequency(Parameters(WordFrequencyParams {
                text: "The fox and the dog. The fox ran.".to_string(),
                top: None,
                extra_stopwords: Some(vec!["ran".to_string()]),
            }))
            .expect("word_frequency should succeed");

        let json = json_of(&result);
        assert_eq!(json["most_common_words"][0][0], "fox");
        assert_eq!(json["most_common_words"][0][1], 2);
        assert_eq!(json["unique_words"], 2);
        assert_eq!(json["total_words_analyzed"], 3);
    }
}
