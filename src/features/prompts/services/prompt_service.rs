use crate::core::error::{AppError, Result};
use crate::features::prompts::dtos::{
    AnalyzeRequestDto, AnalyzeResponseDto, GenerateRequestDto, GenerateResponseDto,
    GeneratedPromptResponseDto, HistoryResponseDto, ImproveRequestDto, ImproveResponseDto,
};
use crate::features::prompts::models::{GeneratedPrompt, NewGeneratedPrompt};
use crate::shared::prompts::{GenerateParams, PromptEngine};
use crate::shared::render::{render_template, PROMPT_EXPORT_TEMPLATE};
use crate::shared::types::PaginationQuery;
use sqlx::PgPool;
use uuid::Uuid;

const RETURNING_COLUMNS: &str = "id, original_input, ai_tool, output_style, category, \
     seo_keywords, generated_prompt, analysis, score, created_at";

pub struct PromptService {
    pool: PgPool,
    engine: PromptEngine,
}

impl std::fmt::Debug for PromptService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptService")
            .field("pool", &"<PgPool>")
            .field("engine", &self.engine)
            .finish()
    }
}

impl PromptService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            engine: PromptEngine::new(),
        }
    }

    /// Compose, evaluate and persist a new prompt
    pub async fn generate(&self, dto: GenerateRequestDto) -> Result<GenerateResponseDto> {
        let keywords = dto.keywords();
        let generation = self.engine.generate(&GenerateParams {
            user_input: &dto.user_input,
            ai_tool: &dto.ai_tool,
            output_style: &dto.output_style,
            category: &dto.category,
            seo_keywords: keywords,
            operation: dto.operation.as_deref(),
        });

        let record = self
            .insert(NewGeneratedPrompt {
                original_input: &dto.user_input,
                ai_tool: &dto.ai_tool,
                output_style: &dto.output_style,
                category: &dto.category,
                seo_keywords: keywords,
                generated_prompt: &generation.generated_prompt,
                analysis: &generation.analysis,
                score: generation.score,
            })
            .await?;

        tracing::info!(
            "Generated prompt {} (tool={}, category={}, score={})",
            record.id,
            record.ai_tool,
            record.category,
            record.score
        );

        Ok(GenerateResponseDto {
            id: record.id,
            generated_prompt: record.generated_prompt,
            analysis: record.analysis,
            score: record.score,
            template_used: generation.template_used.to_string(),
            ai_tool: record.ai_tool,
            category: record.category,
        })
    }

    /// Rewrite an existing prompt and persist the result
    pub async fn improve(&self, dto: ImproveRequestDto) -> Result<ImproveResponseDto> {
        let improvement = self.engine.improve(
            &dto.existing_prompt,
            &dto.ai_tool,
            &dto.output_style,
            &dto.category,
        );

        let record = self
            .insert(NewGeneratedPrompt {
                original_input: &dto.existing_prompt,
                ai_tool: &dto.ai_tool,
                output_style: &dto.output_style,
                category: &dto.category,
                seo_keywords: None,
                generated_prompt: &improvement.improved_prompt,
                analysis: &improvement.analysis,
                score: improvement.score,
            })
            .await?;

        tracing::info!(
            "Improved prompt {} ({} issues, score={})",
            record.id,
            improvement.issues.len(),
            record.score
        );

        Ok(ImproveResponseDto {
            id: record.id,
            generated_prompt: record.generated_prompt,
            analysis: record.analysis,
            score: record.score,
            improvements_made: improvement.issues,
            ai_tool: record.ai_tool,
            category: record.category,
        })
    }

    /// Evaluate a prompt; nothing is persisted
    pub fn analyze(&self, dto: &AnalyzeRequestDto) -> AnalyzeResponseDto {
        let result = self.engine.analyze(&dto.prompt, &dto.ai_tool, &dto.category);
        AnalyzeResponseDto {
            analysis: result.analysis,
            score: result.score,
            issues: result.issues,
            word_count: result.word_count,
            character_count: result.character_count,
        }
    }

    /// Persisted prompts, newest first
    pub async fn history(&self, query: &PaginationQuery) -> Result<HistoryResponseDto> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM generated_prompts")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM generated_prompts ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            RETURNING_COLUMNS
        );
        let prompts = sqlx::query_as::<_, GeneratedPrompt>(&sql)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(HistoryResponseDto {
            prompts: prompts.into_iter().map(Into::into).collect(),
            total,
            pages: query.total_pages(total),
            current_page: query.page(),
        })
    }

    /// Get a persisted prompt by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<GeneratedPromptResponseDto> {
        let sql = format!(
            "SELECT {} FROM generated_prompts WHERE id = $1",
            RETURNING_COLUMNS
        );
        let prompt = sqlx::query_as::<_, GeneratedPrompt>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Prompt with id {} not found", id)))?;

        Ok(prompt.into())
    }

    /// Plain-text export of a persisted prompt
    pub async fn export_text(&self, id: Uuid) -> Result<String> {
        let prompt = self.get_by_id(id).await?;
        Ok(render_template(PROMPT_EXPORT_TEMPLATE, &prompt)?)
    }

    async fn insert(&self, record: NewGeneratedPrompt<'_>) -> Result<GeneratedPrompt> {
        let sql = format!(
            r#"
            INSERT INTO generated_prompts
                (original_input, ai_tool, output_style, category, seo_keywords,
                 generated_prompt, analysis, score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            RETURNING_COLUMNS
        );

        let prompt = sqlx::query_as::<_, GeneratedPrompt>(&sql)
            .bind(record.original_input)
            .bind(record.ai_tool)
            .bind(record.output_style)
            .bind(record.category)
            .bind(record.seo_keywords)
            .bind(record.generated_prompt)
            .bind(record.analysis)
            .bind(record.score)
            .fetch_one(&self.pool)
            .await?;

        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::run_migrations;
    use crate::shared::test_helpers::lazy_pool;

    /// Service on a migrated database, `None` when `DATABASE_URL` is not set
    async fn live_service() -> Option<PromptService> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPool::connect(&url).await.expect("connect to DATABASE_URL");
        run_migrations(&pool).await.expect("run migrations");
        Some(PromptService::new(pool))
    }

    fn generate_dto(user_input: &str, seo_keywords: Option<&str>) -> GenerateRequestDto {
        GenerateRequestDto {
            user_input: user_input.to_string(),
            ai_tool: "chatgpt".to_string(),
            output_style: "marketing".to_string(),
            category: "marketing".to_string(),
            seo_keywords: seo_keywords.map(String::from),
            operation: None,
        }
    }

    #[tokio::test]
    async fn test_generate_persists_record() {
        let Some(service) = live_service().await else {
            return;
        };

        let generated = service
            .generate(generate_dto("Spring sale on shoes", Some(" shoes ")))
            .await
            .unwrap();
        let stored = service.get_by_id(generated.id).await.unwrap();

        assert_eq!(stored.original_input, "Spring sale on shoes");
        assert_eq!(stored.seo_keywords.as_deref(), Some(" shoes "));
        assert_eq!(stored.generated_prompt, generated.generated_prompt);
        assert_eq!(stored.analysis, generated.analysis);
        assert_eq!(stored.score, generated.score);
        assert_eq!(generated.template_used, "For marketing copy and campaigns");
    }

    #[tokio::test]
    async fn test_improve_stores_no_keywords() {
        let Some(service) = live_service().await else {
            return;
        };

        let improved = service
            .improve(ImproveRequestDto {
                existing_prompt: "Write a poem.".to_string(),
                ai_tool: "claude".to_string(),
                output_style: "creative".to_string(),
                category: "content_generation".to_string(),
            })
            .await
            .unwrap();
        let stored = service.get_by_id(improved.id).await.unwrap();

        assert_eq!(stored.original_input, "Write a poem.");
        assert_eq!(stored.seo_keywords, None);
        assert_eq!(stored.generated_prompt, improved.generated_prompt);
        assert_eq!(improved.improvements_made.len(), 4);
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let Some(service) = live_service().await else {
            return;
        };

        let older = service.generate(generate_dto("first", None)).await.unwrap();
        let newer = service.generate(generate_dto("second", None)).await.unwrap();

        let query = PaginationQuery {
            page: 1,
            page_size: 100,
        };
        let history = service.history(&query).await.unwrap();
        let position = |id: Uuid| history.prompts.iter().position(|p| p.id == id);

        assert_eq!(history.current_page, 1);
        assert!(history.total >= 2);
        assert_eq!(history.pages, query.total_pages(history.total));
        let (newer_pos, older_pos) = (position(newer.id).unwrap(), position(older.id).unwrap());
        assert!(newer_pos < older_pos);
    }

    #[tokio::test]
    async fn test_export_text_and_missing_record() {
        let Some(service) = live_service().await else {
            return;
        };

        let generated = service
            .generate(generate_dto("Launch our app", None))
            .await
            .unwrap();
        let text = service.export_text(generated.id).await.unwrap();
        assert_eq!(
            text,
            format!(
                "Generated Prompt:\n{}\n\nAnalysis:\n{}\n\nScore: {}/100",
                generated.generated_prompt, generated.analysis, generated.score
            )
        );

        let missing = service.get_by_id(Uuid::now_v7()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_analyze_does_not_touch_database() {
        // The lazy pool never connects; a query would fail
        let service = PromptService::new(lazy_pool());
        let dto = AnalyzeRequestDto {
            prompt: "Write a poem.".to_string(),
            ai_tool: "chatgpt".to_string(),
            category: "content_generation".to_string(),
        };

        let result = service.analyze(&dto);
        assert_eq!(result.score, 60);
        assert_eq!(result.word_count, 3);
        assert_eq!(result.character_count, 13);
        assert_eq!(result.issues.len(), 4);
    }
}
