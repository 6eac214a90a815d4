//! Command line definition

use anyhow::Context;
use clap::{ArgAction, Parser};
use jaas_jwt::TokenRequest;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jaas-jwt")]
#[command(version, about = "Issue signed JaaS meeting tokens")]
pub struct Cli {
    /// PKCS#8 PEM private key registered with the API key
    ///
    /// Convert a PKCS#1 key first:
    ///   openssl pkcs8 -topk8 -inform PEM -in <input> -outform pem -nocrypt -out <output>
    #[arg(long, short = 'k', env = "JAAS_PRIVATE_KEY", default_value = "rsa-private.pem")]
    pub key: PathBuf,

    /// JSON token request; flags below override its fields
    #[arg(long, short = 'r')]
    pub request: Option<PathBuf>,

    /// API key, sent as the `kid` header
    #[arg(long, env = "JAAS_API_KEY")]
    pub api_key: Option<String>,

    /// AppID, sent as `sub`
    #[arg(long, env = "JAAS_APP_ID")]
    pub app_id: Option<String>,

    /// Room name, `*` for every room
    #[arg(long)]
    pub room: Option<String>,

    /// User identifier (random UUID by default)
    #[arg(long)]
    pub user_id: Option<String>,

    /// User display name
    #[arg(long)]
    pub name: Option<String>,

    /// User email
    #[arg(long)]
    pub email: Option<String>,

    /// User avatar URL
    #[arg(long)]
    pub avatar: Option<String>,

    /// Moderator rights
    #[arg(long, action = ArgAction::Set)]
    pub moderator: Option<bool>,

    /// Live streaming
    #[arg(long, action = ArgAction::Set)]
    pub livestreaming: Option<bool>,

    /// Recording
    #[arg(long, action = ArgAction::Set)]
    pub recording: Option<bool>,

    /// Outbound calls
    #[arg(long, action = ArgAction::Set)]
    pub outbound: Option<bool>,

    /// Transcription
    #[arg(long, action = ArgAction::Set)]
    pub transcription: Option<bool>,

    /// Expiry (unix seconds)
    #[arg(long)]
    pub exp: Option<i64>,

    /// Not before (unix seconds)
    #[arg(long)]
    pub nbf: Option<i64>,

    /// Skip the default claims
    #[arg(long)]
    pub no_defaults: bool,
}

impl Cli {
    /// Read the request file, if any, and lay the flags over it
    pub fn token_request(&self) -> anyhow::Result<TokenRequest> {
        let base = match &self.request {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading token request {}", path.display()))?;
                TokenRequest::from_json(&json)
                    .with_context(|| format!("parsing token request {}", path.display()))?
            }
            None => TokenRequest::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut request: TokenRequest) -> TokenRequest {
        if self.no_defaults {
            request.defaults = false;
        }

        fn set<T: Clone>(target: &mut Option<T>, flag: &Option<T>) {
            if flag.is_some() {
                target.clone_from(flag);
            }
        }

        set(&mut request.api_key, &self.api_key);
        set(&mut request.app_id, &self.app_id);
        set(&mut request.room, &self.room);
        set(&mut request.user_id, &self.user_id);
        set(&mut request.name, &self.name);
        set(&mut request.email, &self.email);
        set(&mut request.avatar, &self.avatar);
        set(&mut request.moderator, &self.moderator);
        set(&mut request.livestreaming, &self.livestreaming);
        set(&mut request.recording, &self.recording);
        set(&mut request.outbound, &self.outbound);
        set(&mut request.transcription, &self.transcription);
        set(&mut request.exp, &self.exp);
        set(&mut request.nbf, &self.nbf);
        request
    }
}
