//! 対話セッションの状態
//!
//! 言語・サンプル・カルーセル位置をひとまとめにした値。
//! 操作はすべて新しい Session を返す。

use crate::scanner::{ReferenceImages, ReferenceLibrary};
use soil_survey_common::carousel::{CarouselKey, CarouselState, Navigation};
use soil_survey_common::texts::texts;
use soil_survey_common::{analyze, catalog, AttributeCategory, Interpretation, Language, Sample};
use std::path::PathBuf;

/// 参照画像の表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceView {
    /// 未選択（何も表示しない）
    NoSelection,
    /// 参照フォルダがない
    NoReference { selection: String, folder: PathBuf },
    /// フォルダに画像がない
    NoImages { folder: PathBuf },
    Showing {
        selection: String,
        path: PathBuf,
        /// 1始まり
        position: usize,
        total: usize,
    },
}

impl ReferenceView {
    /// 画像下のキャプション
    pub fn caption(&self) -> Option<String> {
        match self {
            ReferenceView::Showing { selection, position, total, .. } => {
                Some(format!("{} ({}/{})", selection, position, total))
            }
            _ => None,
        }
    }

    /// 画像がない場合の案内文
    pub fn notice(&self, language: Language) -> Option<String> {
        let t = texts(language);
        match self {
            ReferenceView::NoReference { selection, .. } => {
                Some(format!("{} {}", t.no_folder_msg, selection))
            }
            ReferenceView::NoImages { folder } => {
                Some(format!("{} {}", t.no_images_msg, folder.display()))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub language: Language,
    pub sample: Sample,
    pub carousel: CarouselState,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// 言語切替（選択肢が変わるので選択はリセット、画像と位置は保持）
    pub fn with_language(self, language: Language) -> Self {
        if language == self.language {
            return self;
        }
        Self {
            language,
            sample: self.sample.without_selections(),
            carousel: self.carousel,
        }
    }

    pub fn select(self, category: AttributeCategory, value: &str) -> Self {
        Self {
            sample: self.sample.with_selection(self.language, category, value),
            ..self
        }
    }

    pub fn with_image(self, image: Option<PathBuf>) -> Self {
        Self {
            sample: self.sample.with_image(image),
            ..self
        }
    }

    pub fn carousel_key(&self, category: AttributeCategory) -> Option<CarouselKey> {
        self.sample
            .selection(category)
            .map(|selection| CarouselKey::new(category, selection))
    }

    /// 現在の選択の参照画像を表示する（初回はインデックス0で登録）
    pub fn view(self, library: &ReferenceLibrary, category: AttributeCategory) -> (Self, ReferenceView) {
        self.render(library, category, None)
    }

    /// 前後に移動してから表示する
    pub fn navigate(
        self,
        library: &ReferenceLibrary,
        category: AttributeCategory,
        navigation: Navigation,
    ) -> (Self, ReferenceView) {
        self.render(library, category, Some(navigation))
    }

    fn render(
        self,
        library: &ReferenceLibrary,
        category: AttributeCategory,
        navigation: Option<Navigation>,
    ) -> (Self, ReferenceView) {
        let Some(key) = self.carousel_key(category) else {
            return (self, ReferenceView::NoSelection);
        };

        let canonical = catalog::normalize(self.language, category, &key.selection);
        let images = match library.images(category, &canonical) {
            ReferenceImages::Missing(folder) => {
                let view = ReferenceView::NoReference {
                    selection: key.selection.clone(),
                    folder,
                };
                return (self, view);
            }
            ReferenceImages::Empty(folder) => {
                return (self, ReferenceView::NoImages { folder });
            }
            ReferenceImages::Found(_, images) => images,
        };

        let total = images.len();
        let mut carousel = self.carousel.observe(&key);
        if let Some(navigation) = navigation {
            carousel = carousel.navigate(&key, total, navigation);
        }
        let index = carousel.index(&key, total).unwrap_or(0);

        let view = ReferenceView::Showing {
            selection: key.selection.clone(),
            path: images[index].path.clone(),
            position: index + 1,
            total,
        };

        (Self { carousel, ..self }, view)
    }

    /// 完成していれば解釈する
    pub fn analysis(&self) -> Option<Interpretation> {
        analyze(&self.sample, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn library_with(folder: &[&str], files: &[&str]) -> (tempfile::TempDir, ReferenceLibrary) {
        let root = tempfile::tempdir().unwrap();
        let dir = folder.iter().fold(root.path().to_path_buf(), |p, f| p.join(f));
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            File::create(dir.join(file)).unwrap();
        }
        let library = ReferenceLibrary::new(root.path());
        (root, library)
    }

    #[test]
    fn test_no_selection_renders_nothing() {
        let (_root, library) = library_with(&["color", "negro"], &["1.jpg"]);
        let (_, view) = Session::new(Language::Es).view(&library, AttributeCategory::Color);
        assert_eq!(view, ReferenceView::NoSelection);
    }

    #[test]
    fn test_pt_selection_resolves_shared_folder() {
        let (_root, library) = library_with(&["forma-estructura", "masiva"], &["1.jpg", "2.jpg"]);
        let session = Session::new(Language::Pt).select(AttributeCategory::Structure, "maciça");
        let (_, view) = session.view(&library, AttributeCategory::Structure);
        assert_eq!(view.caption(), Some("maciça (1/2)".to_string()));
    }

    #[test]
    fn test_navigation_wraps() {
        let (_root, library) = library_with(&["color", "gris"], &["a.jpg", "b.jpg", "c.jpg"]);
        let session = Session::new(Language::Es).select(AttributeCategory::Color, "gris");

        let (session, view) = session.navigate(&library, AttributeCategory::Color, Navigation::Prev);
        assert_eq!(view.caption(), Some("gris (3/3)".to_string()));

        let (_, view) = session.navigate(&library, AttributeCategory::Color, Navigation::Next);
        assert_eq!(view.caption(), Some("gris (1/3)".to_string()));
    }

    #[test]
    fn test_missing_and_empty_folders() {
        let (_root, library) = library_with(&["textura", "franco"], &["notas.txt"]);

        let session = Session::new(Language::Es)
            .select(AttributeCategory::Texture, "franco")
            .select(AttributeCategory::Color, "verde");

        let (session, view) = session.view(&library, AttributeCategory::Texture);
        assert!(matches!(view, ReferenceView::NoImages { .. }));
        assert!(view.notice(Language::Es).unwrap().starts_with("No se encontraron imágenes"));

        let (_, view) = session.view(&library, AttributeCategory::Color);
        assert!(matches!(view, ReferenceView::NoReference { .. }));
        assert_eq!(
            view.notice(Language::Es),
            Some("No existe carpeta de referencia para verde".to_string())
        );
    }

    #[test]
    fn test_language_toggle_clears_selections() {
        let (_root, library) = library_with(&["color", "negro"], &["1.jpg", "2.jpg"]);
        let (session, _) = Session::new(Language::Es)
            .select(AttributeCategory::Color, "negro")
            .with_image(Some(PathBuf::from("muestra.jpg")))
            .navigate(&library, AttributeCategory::Color, Navigation::Next);
        let carousel = session.carousel.clone();

        let session = session.with_language(Language::Pt);
        assert_eq!(session.language, Language::Pt);
        assert_eq!(session.sample.selection(AttributeCategory::Color), None);
        assert!(session.sample.image().is_some());
        assert_eq!(session.carousel, carousel);

        // 同じ言語なら何も変えない
        let session = session.select(AttributeCategory::Color, "preto");
        let same = session.clone().with_language(Language::Pt);
        assert_eq!(same.sample, session.sample);
    }
}
