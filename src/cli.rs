use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Solanaプログラム上の書籍カタログを閲覧する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 書籍カードを一覧表示
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 保存済みの生レコード（JSON）から読み込む
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Anchor IDLファイル（プログラムIDと識別子を取得）
        #[arg(long)]
        idl: Option<PathBuf>,
    },

    /// カードを対話式に裏返して閲覧
    Browse {
        /// 保存済みの生レコード（JSON）から読み込む
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Anchor IDLファイル
        #[arg(long)]
        idl: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// RPC URLを設定
        #[arg(long)]
        set_rpc_url: Option<String>,

        /// 書籍プログラムIDを設定
        #[arg(long)]
        set_program_id: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
