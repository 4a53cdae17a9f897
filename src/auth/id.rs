use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
