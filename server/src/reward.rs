use std::path::PathBuf;

use crate::error::BoxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardSource {
    Inline(String),
    File(PathBuf),
}

impl RewardSource {
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Result<Self, BoxError> {
        match (inline, file) {
            (Some(token), None) => Ok(Self::Inline(token)),
            (None, Some(path)) => Ok(Self::File(path)),
            (Some(_), Some(_)) => {
                Err("give either a reward token or a reward file, not both".into())
            }
            (None, None) => Err("no reward configured (use --reward or --reward-file)".into()),
        }
    }

    pub async fn load(&self) -> Result<String, BoxError> {
        let token = match self {
            Self::Inline(token) => token.trim().to_owned(),
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|err| format!("reading reward file {}: {}", path.display(), err))?
                .trim()
                .to_owned(),
        };
        if token.is_empty() {
            return Err("reward token is empty".into());
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::RewardSource;

    #[test]
    fn requires_exactly_one_source() {
        assert!(RewardSource::from_args(None, None).is_err());
        assert!(RewardSource::from_args(Some("a".into()), Some("b".into())).is_err());
        assert_eq!(
            RewardSource::from_args(Some("token".into()), None).ok(),
            Some(RewardSource::Inline("token".into()))
        );
    }

    #[tokio::test]
    async fn loads_trimmed_token_from_file() {
        let path = env::temp_dir().join(format!("luckydraw-reward-{}.txt", process::id()));
        fs::write(&path, "token{from-file}\n").expect("temp file writable");

        let token = RewardSource::File(path.clone()).load().await;
        let _ = fs::remove_file(&path);
        assert_eq!(token.ok().as_deref(), Some("token{from-file}"));
    }

    #[tokio::test]
    async fn rejects_empty_or_missing_token() {
        assert!(RewardSource::Inline("   ".into()).load().await.is_err());
        let missing = RewardSource::File("/nonexistent/luckydraw/reward".into());
        assert!(missing.load().await.is_err());
    }
}
