//! サンプル巡回管理
//!
//! フィードごとのサンプルJSONプールを保持し、どのファイルを返すかを
//! 時間窓付きランダム選択で決定する。一度選んだファイルは10秒間
//! 返し続け、窓が切れたら直前のファイルを除いてランダムに引き直す。
//! ファイル内容はキャッシュせず、リクエストごとにディスクから読み直す。

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::time::Instant;

use crate::error::{FeedError, FeedResult};

/// 同一サンプルを返し続ける時間（秒）
const STICKY_WINDOW_SECS: u64 = 10;

/// 選択されたサンプルの読み出し結果
#[derive(Debug, Clone)]
pub struct Sample {
    /// ファイル名（ログ用の識別子）
    pub name: String,
    /// ファイル内容（生のJSONバイト列）
    pub body: Vec<u8>,
}

/// プール内の1ファイル
#[derive(Debug, Clone)]
struct SampleFile {
    name: String,
    path: PathBuf,
}

/// 選択状態。ロック下でのみ更新される。
#[derive(Debug, Default)]
struct Selection {
    /// 現在提供中のファイル（プール内インデックス）
    current: Option<usize>,
    /// 直前まで提供していたファイル。次回の引き直しで候補から外す
    last: Option<usize>,
    /// `current` を選択した時刻
    selected_at: Option<Instant>,
}

#[derive(Debug)]
struct CyclerInner {
    feed: String,
    dir: PathBuf,
    files: Vec<SampleFile>,
    selection: Mutex<Selection>,
}

/// サンプル巡回器（フィードごとに1つ）
///
/// クローンはプールと選択状態を共有する。選択の判定はロック内で
/// 行うが、ファイルの読み出しはロックを手放してから行うため、
/// ディスクI/Oが並行リクエストを塞ぐことはない。
#[derive(Clone, Debug)]
pub struct SampleCycler {
    inner: Arc<CyclerInner>,
}

impl SampleCycler {
    /// ディレクトリ直下の `*.json` を列挙してプールを構築する
    ///
    /// 1件も見つからない場合は `FeedError::EmptyPool` を返す。
    pub fn from_dir(feed: impl Into<String>, dir: impl AsRef<Path>) -> FeedResult<Self> {
        let feed = feed.into();
        let dir = dir.as_ref().to_path_buf();

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };
            files.push(SampleFile { name, path });
        }
        // read_dirの列挙順はOS依存なので名前順に揃える
        files.sort_by(|a, b| a.name.cmp(&b.name));

        if files.is_empty() {
            return Err(FeedError::EmptyPool { feed, dir });
        }

        Ok(Self {
            inner: Arc::new(CyclerInner {
                feed,
                dir,
                files,
                selection: Mutex::new(Selection::default()),
            }),
        })
    }

    /// フィード名を返す
    pub fn feed(&self) -> &str {
        &self.inner.feed
    }

    /// プールの元になったディレクトリを返す
    pub fn dir(&self) -> &Path {
        &self.inner.dir
    }

    /// プール内のファイル数を返す
    pub fn pool_size(&self) -> usize {
        self.inner.files.len()
    }

    /// 現在提供すべきファイルを決定し、その名前を返す
    ///
    /// 前回の選択から10秒未満なら同じファイルを返す。10秒以上経過して
    /// いれば直前のファイルを除いてランダムに引き直す（プールが1件
    /// だけの場合は同じファイルの再選択を許す）。
    pub fn select(&self) -> String {
        self.inner.files[self.select_index()].name.clone()
    }

    /// 選択中のサンプルをディスクから読み出して返す
    ///
    /// 内容はリクエストごとに読み直すため、窓の途中でファイルを
    /// 書き換えた場合も次のレスポンスには反映される。
    pub async fn fetch(&self) -> FeedResult<Sample> {
        let file = self.inner.files[self.select_index()].clone();
        let body = tokio::fs::read(&file.path).await?;
        Ok(Sample {
            name: file.name,
            body,
        })
    }

    /// 選択アルゴリズム本体。ロックは判定と状態更新の間のみ保持する。
    fn select_index(&self) -> usize {
        let mut sel = self.inner.selection.lock().unwrap();

        let expired = match sel.selected_at {
            Some(at) => at.elapsed() >= Duration::from_secs(STICKY_WINDOW_SECS),
            None => true,
        };
        if !expired {
            if let Some(idx) = sel.current {
                return idx;
            }
        }

        // 窓が切れた（または初回）ので引き直す
        sel.last = sel.current.take();
        let candidates: Vec<usize> = (0..self.inner.files.len())
            .filter(|i| Some(*i) != sel.last)
            .collect();
        let next = match candidates.choose(&mut rand::thread_rng()) {
            Some(&idx) => idx,
            // 直前のファイルを除くと候補が尽きる＝プールが1件のみ
            None => 0,
        };
        sel.current = Some(next);
        sel.selected_at = Some(Instant::now());
        tracing::debug!(
            "[{}] rotated to {}",
            self.inner.feed,
            self.inner.files[next].name
        );
        next
    }
}
