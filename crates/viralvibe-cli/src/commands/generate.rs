//! `viralvibe generate` - generates posts and records the request.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Args;

use viralvibe_application::{GenerationService, HistoryService};
use viralvibe_core::community::CommunityCatalog;
use viralvibe_core::generation::{GeneratedPost, GenerationRequest, PostField};
use viralvibe_core::secret::SecretService;
use viralvibe_infrastructure::{
    config_service, FileHistoryRepository, FileSecretService, SystemClipboard,
};
use viralvibe_interaction::GeminiApiClient;

#[derive(Args)]
pub struct GenerateArgs {
    /// Topic or keyword to promote (e.g. "갤럭시 S24 울트라 사용기")
    pub topic: String,

    /// Blog/site URL the posts should drive traffic to
    #[arg(long)]
    pub url: Option<String>,

    /// Extra emphasis for the model (e.g. "결론은 블로그에 있다고 언급해줘")
    #[arg(long)]
    pub context: Option<String>,

    /// Target community id (repeatable); defaults to the configured
    /// preselection
    #[arg(short = 'c', long = "community")]
    pub communities: Vec<String>,

    /// Copy one fragment of a generated post, as "<community>:<field>"
    /// where field is title, body or comment
    #[arg(long)]
    pub copy: Option<String>,

    /// Print the generated posts as raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    let config = config_service::load_config(None).await?;

    let secret_service = FileSecretService::new(None)?;
    secret_service.ensure_secret_file().await?;
    let secrets = secret_service.load_secrets().await?;

    let mut client = GeminiApiClient::from_secrets(&secrets)?;
    if let Some(model) = &config.gemini.model {
        client = client.with_model(model.clone());
    }

    let catalog = CommunityCatalog::with_defaults();
    let generation = GenerationService::new(catalog.clone(), Arc::new(client));
    let history = HistoryService::new(Arc::new(FileHistoryRepository::new(None)?));

    let selected_ids = if args.communities.is_empty() {
        config.default_communities_or_builtin()
    } else {
        args.communities.clone()
    };

    let request = GenerationRequest {
        topic: args.topic.clone(),
        target_url: args.url.clone(),
        extra_context: args.context.clone(),
        selected_ids,
    };
    request.validate()?;

    let posts = generation.generate(&request).await?;

    // Save successful generation inputs only
    history.record(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        print_posts(&catalog, &posts);
    }

    if let Some(target) = &args.copy {
        copy_fragment(&posts, target)?;
    }

    Ok(())
}

fn print_posts(catalog: &CommunityCatalog, posts: &[GeneratedPost]) {
    if posts.is_empty() {
        println!("생성된 글이 없습니다.");
        return;
    }

    println!("{}개의 플랫폼용 글이 생성되었습니다.\n", posts.len());

    for post in posts {
        let Some(community) = catalog.find_by_id(&post.community_id) else {
            continue;
        };

        println!("{} {} ({})", community.emoji, community.name, post.community_id);
        println!("제목: {}", post.title);
        println!("본문:\n{}", post.content);
        if !post.hashtags.is_empty() {
            println!("해시태그: {}", post.hashtags.join(" "));
        }
        println!("바이럴 댓글: {}", post.comment);
        println!("{}", "─".repeat(40));
    }
}

fn copy_fragment(posts: &[GeneratedPost], target: &str) -> Result<()> {
    let (community_id, field) = target
        .split_once(':')
        .ok_or_else(|| anyhow!("--copy 형식은 <community>:<field> 입니다 (예: dcinside:title)"))?;

    let field = PostField::from_str(field)
        .map_err(|_| anyhow!("복사할 필드는 title, body, comment 중 하나여야 합니다"))?;

    let post = posts
        .iter()
        .find(|p| p.community_id == community_id)
        .ok_or_else(|| anyhow!("'{}' 커뮤니티의 생성 결과가 없습니다", community_id))?;

    SystemClipboard::copy_text(&post.fragment(field))?;
    println!("클립보드에 복사했습니다: {}:{}", community_id, field);
    Ok(())
}
