//! 画面・帳票の文言（es/pt）

use crate::catalog::{AttributeCategory, Language};

#[derive(Debug)]
pub struct UiTexts {
    pub app_title: &'static str,
    pub color_label: &'static str,
    pub texture_label: &'static str,
    pub structure_label: &'static str,
    pub moisture_label: &'static str,
    pub roots_label: &'static str,
    pub uploaded_caption: &'static str,
    pub capture_date: &'static str,
    pub interpret_title: &'static str,
    pub summary_title: &'static str,
    pub interpret_block_title: &'static str,
    pub structure_info_title: &'static str,
    pub recs_title: &'static str,
    pub report_title: &'static str,
    pub record_saved: &'static str,
    pub pdf_saved: &'static str,
    pub no_images_msg: &'static str,
    pub no_folder_msg: &'static str,
    pub tips_refs: &'static str,
    pub incomplete_msg: &'static str,
    pub no_records_msg: &'static str,
    pub carousel_prev: &'static str,
    pub carousel_next: &'static str,
    pub carousel_confirm: &'static str,
    pub upload_prompt: &'static str,
    pub save_prompt: &'static str,
    pub pdf_prompt: &'static str,
    /// もう一方の言語でやり直すか
    pub switch_language_prompt: &'static str,
}

impl UiTexts {
    /// カテゴリのラベル
    pub fn label(&self, category: AttributeCategory) -> &'static str {
        match category {
            AttributeCategory::Color => self.color_label,
            AttributeCategory::Texture => self.texture_label,
            AttributeCategory::Structure => self.structure_label,
            AttributeCategory::Moisture => self.moisture_label,
            AttributeCategory::Roots => self.roots_label,
        }
    }
}

static ES: UiTexts = UiTexts {
    app_title: "Análisis Visual de Suelos",
    color_label: "Color del suelo",
    texture_label: "Textura del suelo",
    structure_label: "Forma / Estructura",
    moisture_label: "Humedad",
    roots_label: "Presencia de raíces",
    uploaded_caption: "Imagen analizada",
    capture_date: "Fecha de captura",
    interpret_title: "Conclusión del análisis",
    summary_title: "Resumen de la muestra",
    interpret_block_title: "Interpretación técnica",
    structure_info_title: "Más información",
    recs_title: "Recomendaciones de manejo",
    report_title: "Reporte de Análisis Visual de Suelos",
    record_saved: "Análisis guardado",
    pdf_saved: "Reporte PDF generado",
    no_images_msg: "No se encontraron imágenes en la carpeta",
    no_folder_msg: "No existe carpeta de referencia para",
    tips_refs: "Compara tu muestra con estas referencias visuales para confirmar tu selección.",
    incomplete_msg: "Faltan características por seleccionar",
    no_records_msg: "No hay análisis guardados",
    carousel_prev: "Anterior",
    carousel_next: "Siguiente",
    carousel_confirm: "Confirmar selección",
    upload_prompt: "Ruta de la imagen de suelo (opcional)",
    save_prompt: "¿Guardar análisis?",
    pdf_prompt: "¿Generar reporte PDF?",
    switch_language_prompt: "¿Repetir la selección en portugués?",
};

static PT: UiTexts = UiTexts {
    app_title: "Análise Visual de Solos",
    color_label: "Cor do solo",
    texture_label: "Textura do solo",
    structure_label: "Forma / Estrutura",
    moisture_label: "Umidade",
    roots_label: "Presença de raízes",
    uploaded_caption: "Imagem analisada",
    capture_date: "Data de captura",
    interpret_title: "Conclusão da análise",
    summary_title: "Resumo da amostra",
    interpret_block_title: "Interpretação técnica",
    structure_info_title: "Mais informações",
    recs_title: "Recomendações de manejo",
    report_title: "Relatório de Análise Visual de Solos",
    record_saved: "Análise salva",
    pdf_saved: "Relatório PDF gerado",
    no_images_msg: "Não foram encontradas imagens na pasta",
    no_folder_msg: "Não existe pasta de referência para",
    tips_refs: "Compare sua amostra com estas referências visuais para confirmar sua seleção.",
    incomplete_msg: "Faltam características a selecionar",
    no_records_msg: "Não há análises salvas",
    carousel_prev: "Anterior",
    carousel_next: "Próxima",
    carousel_confirm: "Confirmar seleção",
    upload_prompt: "Caminho da imagem do solo (opcional)",
    save_prompt: "Salvar análise?",
    pdf_prompt: "Gerar relatório PDF?",
    switch_language_prompt: "Repetir a seleção em espanhol?",
};

pub fn texts(language: Language) -> &'static UiTexts {
    match language {
        Language::Es => &ES,
        Language::Pt => &PT,
    }
}
