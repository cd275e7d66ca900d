//! Spreadsheet header vocabulary
//!
//! The upstream sheets are user-edited: header text has drifted over the
//! years, so reads probe an ordered candidate list per logical field. The
//! first candidate of each list is the canonical header and is what writes
//! produce: one table serves both directions, so a header accepted on read
//! is never written back under a different spelling.

use serde_json::{Map, Value};

/// Pick the first candidate present among the given headers.
/// Returns `None` when no candidate matches; callers fall back to an
/// empty-string field value, never an error.
pub fn detect_column(headers: &[String], candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|c| headers.iter().any(|h| h == *c))
        .map(|c| c.to_string())
}

/// Canonical (write-side) header: the first candidate
pub fn canonical(candidates: &'static [&'static str]) -> &'static str {
    candidates.first().copied().unwrap_or("")
}

// ========== Member vocabulary ==========

pub const MEMBER_NOME: &[&str] = &["Nome Completo", "Nome", "NOME COMPLETO"];
pub const MEMBER_FOTO: &[&str] = &["Foto", "FOTO", "Foto (URL)", "Link da Foto"];
pub const MEMBER_FICHA: &[&str] = &["Link Ficha", "Ficha", "Link da Ficha", "Dados Ficha"];
pub const MEMBER_CARTEIRINHA: &[&str] = &[
    "Link Carteirinha",
    "Carteirinha",
    "Dados Carteirinha",
    "[Carteirinha]",
];

// Headers that never drifted upstream keep a single spelling
pub const H_DATA_NASCIMENTO: &str = "Data de Nascimento";
pub const H_IDADE: &str = "Idade";
pub const H_RG: &str = "RG";
pub const H_CPF: &str = "CPF";
pub const H_TELEFONE: &str = "Telefone";
pub const H_EMAIL: &str = "E-mail";
pub const H_ENDERECO: &str = "Endereço";
pub const H_NUMERO: &str = "Número";
pub const H_BAIRRO: &str = "Bairro";
pub const H_CIDADE: &str = "Cidade";
pub const H_ESTADO: &str = "Estado";
pub const H_CEP: &str = "CEP";
pub const H_CIDADE_NASCIMENTO: &str = "Cidade de Nascimento";
pub const H_ESTADO_NASCIMENTO: &str = "Estado de Nascimento";
pub const H_ESTADO_CIVIL: &str = "Estado Civil";
pub const H_PROFISSAO: &str = "Profissão";
pub const H_CARGO: &str = "Cargo Ministerial";
pub const H_DATA_BATISMO: &str = "Data de Batismo";
pub const H_DATA_ORDENACAO: &str = "Data de Ordenação";
pub const H_IGREJA_BATISMO: &str = "Igreja de Batismo";
pub const H_ATIVO: &str = "Ativo";
pub const H_OBSERVACOES: &str = "Observações";

// ========== Church vocabulary ==========

pub const CHURCH_NOME: &[&str] = &["Nome", "Nome da Igreja", "NOME"];

pub const H_CLASSIFICACAO: &str = "Classificação";
pub const H_TIPO: &str = "Tipo";
pub const H_RUA: &str = "Rua";
pub const H_PASTOR: &str = "Pastor";
pub const H_PASTOR_TELEFONE: &str = "Telefone do Pastor";
pub const H_PASTOR_EMAIL: &str = "E-mail do Pastor";
pub const H_PASTOR_CREDENCIAL: &str = "Credencial do Pastor";
pub const H_MEMBROS_INICIAIS: &str = "Membros Iniciais";
pub const H_MEMBROS_ATUAIS: &str = "Membros Atuais";
pub const H_ALMAS_BATIZADAS: &str = "Almas Batizadas";
pub const H_ESCOLA_CRIANCAS: &str = "Escola de Crianças";
pub const H_CRIANCAS_QUANTIDADE: &str = "Quantidade de Crianças";
pub const H_DIAS_FUNCIONAMENTO: &str = "Dias de Funcionamento";

// ========== Cell helpers ==========

/// Read a cell as trimmed text; numbers are rendered, null/missing is empty
pub fn cell(row: &Map<String, Value>, header: &str) -> String {
    match row.get(header) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Integer cell; anything unparseable is 0
pub fn cell_i64(row: &Map<String, Value>, header: &str) -> i64 {
    match row.get(header) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Active-flag cell; blank means active
pub fn cell_ativo(row: &Map<String, Value>, header: &str) -> bool {
    let text = cell(row, header);
    !matches!(
        text.to_lowercase().as_str(),
        "não" | "nao" | "false" | "0" | "inativo"
    )
}

/// Yes/no cell; blank means no
pub fn cell_sim(row: &Map<String, Value>, header: &str) -> bool {
    matches!(
        cell(row, header).to_lowercase().as_str(),
        "sim" | "true" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn detect_prefers_earlier_candidates() {
        let hs = headers(&["Nome", "Foto", "Link Carteirinha", "Carteirinha"]);
        assert_eq!(
            detect_column(&hs, MEMBER_CARTEIRINHA),
            Some("Link Carteirinha".to_string())
        );
        assert_eq!(detect_column(&hs, MEMBER_NOME), Some("Nome".to_string()));
    }

    #[test]
    fn detect_finds_legacy_bracketed_header() {
        let hs = headers(&["Nome Completo", "[Carteirinha]"]);
        assert_eq!(
            detect_column(&hs, MEMBER_CARTEIRINHA),
            Some("[Carteirinha]".to_string())
        );
    }

    #[test]
    fn detect_returns_none_when_no_candidate_matches() {
        let hs = headers(&["Coluna A", "Coluna B"]);
        assert_eq!(detect_column(&hs, MEMBER_FOTO), None);
    }

    #[test]
    fn canonical_is_first_candidate() {
        assert_eq!(canonical(MEMBER_NOME), "Nome Completo");
        assert_eq!(canonical(MEMBER_CARTEIRINHA), "Link Carteirinha");
    }

    #[test]
    fn cell_handles_numbers_and_missing() {
        let row = json!({"Idade": 35, "Nome Completo": "  Ana  "});
        let row = row.as_object().unwrap();
        assert_eq!(cell(row, "Nome Completo"), "Ana");
        assert_eq!(cell(row, "Idade"), "35");
        assert_eq!(cell(row, "CPF"), "");
        assert_eq!(cell_i64(row, "Idade"), 35);
        assert_eq!(cell_i64(row, "CPF"), 0);
    }

    #[test]
    fn ativo_defaults_to_true_on_blank() {
        let row = json!({"Ativo": ""});
        assert!(cell_ativo(row.as_object().unwrap(), "Ativo"));
        let row = json!({"Ativo": "Não"});
        assert!(!cell_ativo(row.as_object().unwrap(), "Ativo"));
    }
}
