use async_trait::async_trait;

/// One application operation, with its own input, output and error types.
#[async_trait]
pub trait UseCase: Send + Sync {
    // Sync because validate borrows the input across an await
    type Input: Send + Sync + 'static;
    type Output: Send + 'static;
    type Error: Send + 'static;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

#[async_trait]
pub trait UseCaseValidatable: UseCase {
    async fn validate(&self, input: &Self::Input) -> Result<(), Self::Error>;

    async fn validate_and_execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.validate(&input).await?;
        self.execute(input).await
    }
}
