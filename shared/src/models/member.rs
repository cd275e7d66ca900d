//! Member Model

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Marital status (estado civil) literals used in forms and documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EstadoCivil {
    #[default]
    #[serde(rename = "Solteiro(a)")]
    Solteiro,
    #[serde(rename = "Casado(a)")]
    Casado,
    #[serde(rename = "Divorciado(a)")]
    Divorciado,
    #[serde(rename = "Viúvo(a)")]
    Viuvo,
    #[serde(rename = "União Estável")]
    UniaoEstavel,
}

impl EstadoCivil {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCivil::Solteiro => "Solteiro(a)",
            EstadoCivil::Casado => "Casado(a)",
            EstadoCivil::Divorciado => "Divorciado(a)",
            EstadoCivil::Viuvo => "Viúvo(a)",
            EstadoCivil::UniaoEstavel => "União Estável",
        }
    }

    /// Lenient parse for values coming from user-edited spreadsheets.
    /// Unknown text falls back to the default literal.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Casado(a)" | "Casado" | "Casada" => EstadoCivil::Casado,
            "Divorciado(a)" | "Divorciado" | "Divorciada" => EstadoCivil::Divorciado,
            "Viúvo(a)" | "Viúvo" | "Viúva" | "Viuvo" => EstadoCivil::Viuvo,
            "União Estável" | "Uniao Estavel" => EstadoCivil::UniaoEstavel,
            _ => EstadoCivil::Solteiro,
        }
    }
}

/// Ministerial role (cargo), defaulting to plain membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CargoMinisterial {
    #[default]
    Membro,
    Auxiliar,
    #[serde(rename = "Diácono")]
    Diacono,
    #[serde(rename = "Presbítero")]
    Presbitero,
    Evangelista,
    #[serde(rename = "Missionário")]
    Missionario,
    Pastor,
}

impl CargoMinisterial {
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoMinisterial::Membro => "Membro",
            CargoMinisterial::Auxiliar => "Auxiliar",
            CargoMinisterial::Diacono => "Diácono",
            CargoMinisterial::Presbitero => "Presbítero",
            CargoMinisterial::Evangelista => "Evangelista",
            CargoMinisterial::Missionario => "Missionário",
            CargoMinisterial::Pastor => "Pastor",
        }
    }

    /// Lenient parse with fallback to `Membro`
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Auxiliar" => CargoMinisterial::Auxiliar,
            "Diácono" | "Diacono" => CargoMinisterial::Diacono,
            "Presbítero" | "Presbitero" => CargoMinisterial::Presbitero,
            "Evangelista" => CargoMinisterial::Evangelista,
            "Missionário" | "Missionario" => CargoMinisterial::Missionario,
            "Pastor" | "Pastora" => CargoMinisterial::Pastor,
            _ => CargoMinisterial::Membro,
        }
    }
}

/// Member entity, camelCase on the wire
///
/// Dates are kept as strings exactly as entered or imported; `idade` is
/// derived from `data_nascimento` at creation time and not recomputed on
/// every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub id: String,
    pub nome_completo: String,
    pub data_nascimento: String,
    pub idade: i64,
    pub rg: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub cidade_nascimento: String,
    pub estado_nascimento: String,
    pub estado_civil: EstadoCivil,
    pub profissao: String,
    pub cargo_ministerial: CargoMinisterial,
    pub data_batismo: String,
    pub data_ordenacao: Option<String>,
    pub igreja_batismo: String,
    pub ativo: bool,
    pub observacoes: String,
    /// Photo URL (canonical name; legacy spreadsheet header variants are
    /// normalized on read)
    pub foto: String,
    /// Link to the externally generated record sheet
    pub link_ficha: String,
    /// Link/token for the membership card
    pub link_carteirinha: String,
    pub data_cadastro: String,
    pub data_atualizacao: String,
}

impl Default for Member {
    fn default() -> Self {
        Self {
            id: String::new(),
            nome_completo: String::new(),
            data_nascimento: String::new(),
            idade: 0,
            rg: String::new(),
            cpf: String::new(),
            telefone: String::new(),
            email: String::new(),
            endereco: String::new(),
            numero: String::new(),
            bairro: String::new(),
            cidade: String::new(),
            estado: String::new(),
            cep: String::new(),
            cidade_nascimento: String::new(),
            estado_nascimento: String::new(),
            estado_civil: EstadoCivil::default(),
            profissao: String::new(),
            cargo_ministerial: CargoMinisterial::default(),
            data_batismo: String::new(),
            data_ordenacao: None,
            igreja_batismo: String::new(),
            ativo: true,
            observacoes: String::new(),
            foto: String::new(),
            link_ficha: String::new(),
            link_carteirinha: String::new(),
            data_cadastro: String::new(),
            data_atualizacao: String::new(),
        }
    }
}

impl Member {
    /// Merge a partial update into this member (unset fields keep their value)
    pub fn apply(&mut self, update: MemberUpdate) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = update.$field { self.$field = v; })*
            };
        }
        merge!(
            nome_completo,
            data_nascimento,
            idade,
            rg,
            cpf,
            telefone,
            email,
            endereco,
            numero,
            bairro,
            cidade,
            estado,
            cep,
            cidade_nascimento,
            estado_nascimento,
            estado_civil,
            profissao,
            cargo_ministerial,
            data_batismo,
            igreja_batismo,
            ativo,
            observacoes,
            foto,
            link_ficha,
            link_carteirinha,
        );
        if let Some(v) = update.data_ordenacao {
            self.data_ordenacao = Some(v);
        }
    }
}

/// Compute age in full years from an ISO `YYYY-MM-DD` birth date.
/// Unparseable input yields 0.
pub fn idade_from(data_nascimento: &str) -> i64 {
    let Ok(birth) = chrono::NaiveDate::parse_from_str(data_nascimento, "%Y-%m-%d") else {
        return 0;
    };
    let today = chrono::Utc::now().date_naive();
    let mut age = today.year() as i64 - birth.year() as i64;
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0)
}

/// Create member payload (no identity, no timestamps)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberCreate {
    pub nome_completo: String,
    pub data_nascimento: String,
    pub rg: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub cidade_nascimento: String,
    pub estado_nascimento: String,
    pub estado_civil: EstadoCivil,
    pub profissao: String,
    pub cargo_ministerial: CargoMinisterial,
    pub data_batismo: String,
    pub data_ordenacao: Option<String>,
    pub igreja_batismo: String,
    pub observacoes: String,
    pub foto: String,
    pub link_ficha: String,
    pub link_carteirinha: String,
}

/// Update member payload (partial merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberUpdate {
    pub nome_completo: Option<String>,
    pub data_nascimento: Option<String>,
    pub idade: Option<i64>,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub cidade_nascimento: Option<String>,
    pub estado_nascimento: Option<String>,
    pub estado_civil: Option<EstadoCivil>,
    pub profissao: Option<String>,
    pub cargo_ministerial: Option<CargoMinisterial>,
    pub data_batismo: Option<String>,
    pub data_ordenacao: Option<String>,
    pub igreja_batismo: Option<String>,
    pub ativo: Option<bool>,
    pub observacoes: Option<String>,
    pub foto: Option<String>,
    pub link_ficha: Option<String>,
    pub link_carteirinha: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut member = Member {
            nome_completo: "Ana Silva".into(),
            telefone: "11 99999-0000".into(),
            ..Default::default()
        };

        member.apply(MemberUpdate {
            telefone: Some("11 98888-1111".into()),
            ..Default::default()
        });

        assert_eq!(member.nome_completo, "Ana Silva");
        assert_eq!(member.telefone, "11 98888-1111");
        assert!(member.ativo);
    }

    #[test]
    fn estado_civil_parse_is_lenient() {
        assert_eq!(EstadoCivil::parse("Casado"), EstadoCivil::Casado);
        assert_eq!(EstadoCivil::parse("Viúva"), EstadoCivil::Viuvo);
        assert_eq!(EstadoCivil::parse("qualquer coisa"), EstadoCivil::Solteiro);
    }

    #[test]
    fn cargo_parse_defaults_to_membro() {
        assert_eq!(CargoMinisterial::parse("Diacono"), CargoMinisterial::Diacono);
        assert_eq!(CargoMinisterial::parse(""), CargoMinisterial::Membro);
    }

    #[test]
    fn idade_from_iso_date() {
        // Someone born in 1990 is at least 30 by now
        assert!(idade_from("1990-06-15") >= 30);
        assert_eq!(idade_from("not a date"), 0);
    }

    #[test]
    fn member_serializes_camel_case() {
        let member = Member {
            nome_completo: "Ana Silva".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["nomeCompleto"], "Ana Silva");
        assert_eq!(json["ativo"], true);
    }
}
