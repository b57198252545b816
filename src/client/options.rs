use crate::config::{ClientConfig, DEFAULT_TEMPERATURE};
use crate::transport::ChatCompletionParams;
use crate::types::Message;
use serde_json::{Map, Value};

/// Set by the call style itself; an extra parameter of the same name is dropped.
const FIXED_PARAMS: [&str; 2] = ["messages", "stream"];

/// Per-call options shared by all four call styles.
///
/// Everything is optional: `model` falls back to the client's default model,
/// `temperature` to `0.7`, and `max_tokens` is left out of the request when unset.
/// Passing `model`, `temperature` or `max_tokens` through [`ChatOptions::param`]
/// is the same as using the setter; the setter wins when both are given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    /// Additional named parameters forwarded verbatim (e.g. `top_p`, `stop`, `response_format`).
    pub extra: Map<String, Value>,
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Add one extra named parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Merge a map of extra named parameters.
    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.extra.extend(params);
        self
    }

    pub(crate) fn into_params(
        self,
        config: &ClientConfig,
        messages: Vec<Message>,
        stream: bool,
    ) -> ChatCompletionParams {
        let mut extra = self.extra;
        for name in FIXED_PARAMS {
            if extra.remove(name).is_some() {
                tracing::warn!(param = name, "ignoring extra parameter owned by the call style");
            }
        }

        let model = bind(&mut extra, "model", self.model, |v| v.as_str().map(str::to_string));
        let temperature = bind(&mut extra, "temperature", self.temperature, Value::as_f64);
        let max_tokens = bind(&mut extra, "max_tokens", self.max_tokens, |v| {
            v.as_u64().and_then(|n| u32::try_from(n).ok())
        });

        ChatCompletionParams {
            model: model.unwrap_or_else(|| config.default_model().to_string()),
            messages,
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
            stream,
            max_tokens,
            extra,
        }
    }
}

/// Move a named extra parameter into its dedicated field unless the setter already filled it.
fn bind<T>(
    extra: &mut Map<String, Value>,
    name: &'static str,
    explicit: Option<T>,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let Some(raw) = extra.remove(name) else {
        return explicit;
    };
    if explicit.is_some() {
        return explicit;
    }
    let value = convert(&raw);
    if value.is_none() && !raw.is_null() {
        tracing::warn!(param = name, value = %raw, "ignoring extra parameter of the wrong type");
    }
    value
}
