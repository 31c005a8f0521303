use crate::core::{GreetingResult, GreetingService, NameInput};
use crate::utils::error::FunctionError;

/// `"Hello, " + name`
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloGreeting;

impl GreetingService for HelloGreeting {
    fn greeting(&self, name: &str) -> String {
        format!("Hello, {}", name)
    }
}

/// 設定檔提供的措辭，`{name}` 會被替換
#[derive(Debug, Clone)]
pub struct TemplateGreeting {
    template: String,
}

impl TemplateGreeting {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl GreetingService for TemplateGreeting {
    fn greeting(&self, name: &str) -> String {
        self.template.replace("{name}", name)
    }
}

/// 把任意 `Fn(&str) -> String` 包成 [`GreetingService`]
#[derive(Clone)]
pub struct FnGreeting<F> {
    f: F,
}

pub fn greeting_fn<F>(f: F) -> FnGreeting<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    FnGreeting { f }
}

impl<F> GreetingService for FnGreeting<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn greeting(&self, name: &str) -> String {
        (self.f)(name)
    }
}

impl<F> std::fmt::Debug for FnGreeting<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGreeting").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GreetingResolver<G: GreetingService = HelloGreeting> {
    service: G,
}

impl<G: GreetingService> GreetingResolver<G> {
    pub fn new(service: G) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &G {
        &self.service
    }

    pub fn resolve(&self, query: Option<&str>, body: Option<&str>) -> GreetingResult {
        match body.or(query) {
            Some(name) => GreetingResult::Ok(self.service.greeting(name)),
            None => GreetingResult::ValidationError(FunctionError::MissingName.to_string()),
        }
    }

    pub fn resolve_input(&self, input: &NameInput) -> GreetingResult {
        self.resolve(input.query.as_deref(), input.body.as_deref())
    }
}
