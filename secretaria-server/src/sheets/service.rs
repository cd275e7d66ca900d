//! SheetSyncService: HTTP client for the spreadsheet proxy
//!
//! Each entity type has its own endpoint and bearer token. GET returns an
//! array of row objects keyed by header text; POST with `{"data": [...]}`
//! appends rows. Reads synthesize the row position (1-based) as the id;
//! the sheet has no stable identity of its own.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value, json};
use shared::models::{
    CargoMinisterial, Church, Endereco, EstadoCivil, Member, Pastor, SheetConnection,
};

use super::SheetStore;
use super::headers::*;
use crate::AppResult;
use crate::utils::AppError;

/// HTTP client for the spreadsheet proxy endpoints
pub struct SheetSyncService {
    client: Client,
}

impl SheetSyncService {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    fn require_configured(conn: &SheetConnection) -> AppResult<()> {
        if !conn.is_configured() {
            return Err(AppError::configuration(
                "Spreadsheet URL and token are not configured",
            ));
        }
        Ok(())
    }

    async fn fetch_rows(&self, conn: &SheetConnection) -> AppResult<Vec<Map<String, Value>>> {
        Self::require_configured(conn)?;

        let response = self
            .client
            .get(&conn.url)
            .bearer_auth(&conn.token)
            .send()
            .await
            .map_err(|e| AppError::SyncFailed(format!("Spreadsheet request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SyncFailed(format!(
                "Spreadsheet read failed with status {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::SyncFailed(format!("Failed to parse spreadsheet rows: {e}")))
    }

    async fn append_rows(
        &self,
        conn: &SheetConnection,
        rows: Vec<Map<String, Value>>,
    ) -> AppResult<()> {
        Self::require_configured(conn)?;

        let response = self
            .client
            .post(&conn.url)
            .bearer_auth(&conn.token)
            .json(&json!({ "data": rows }))
            .send()
            .await
            .map_err(|e| AppError::SyncFailed(format!("Spreadsheet request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SyncFailed(format!(
                "Spreadsheet write failed with status {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl SheetStore for SheetSyncService {
    async fn read_members(&self, conn: &SheetConnection) -> AppResult<Vec<Member>> {
        let rows = self.fetch_rows(conn).await?;
        Ok(parse_member_rows(&rows))
    }

    async fn write_members(&self, conn: &SheetConnection, members: &[Member]) -> AppResult<()> {
        let rows = members.iter().map(member_sheet_row).collect();
        self.append_rows(conn, rows).await
    }

    async fn read_churches(&self, conn: &SheetConnection) -> AppResult<Vec<Church>> {
        let rows = self.fetch_rows(conn).await?;
        Ok(parse_church_rows(&rows))
    }

    async fn write_churches(&self, conn: &SheetConnection, churches: &[Church]) -> AppResult<()> {
        let rows = churches.iter().map(church_sheet_row).collect();
        self.append_rows(conn, rows).await
    }
}

// =============================================================================
// Row parsing (pure, unit-tested without network)
// =============================================================================

/// Columns whose header text drifts upstream, detected per pull from the
/// first data row
struct MemberColumns {
    nome: Option<String>,
    foto: Option<String>,
    ficha: Option<String>,
    carteirinha: Option<String>,
}

fn detect_member_columns(first_row: &Map<String, Value>) -> MemberColumns {
    let headers: Vec<String> = first_row.keys().cloned().collect();
    MemberColumns {
        nome: detect_column(&headers, MEMBER_NOME),
        foto: detect_column(&headers, MEMBER_FOTO),
        ficha: detect_column(&headers, MEMBER_FICHA),
        carteirinha: detect_column(&headers, MEMBER_CARTEIRINHA),
    }
}

/// Parse member rows, discarding blank-name rows and stray header rows
pub fn parse_member_rows(rows: &[Map<String, Value>]) -> Vec<Member> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let columns = detect_member_columns(first);

    let mut members = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let nome = columns
            .nome
            .as_deref()
            .map(|c| cell(row, c))
            .unwrap_or_default();

        // Blank rows and accidental header rows embedded in the data
        if nome.is_empty() || columns.nome.as_deref() == Some(nome.as_str()) {
            continue;
        }

        let detected = |col: &Option<String>| {
            col.as_deref().map(|c| cell(row, c)).unwrap_or_default()
        };

        let data_ordenacao = cell(row, H_DATA_ORDENACAO);
        members.push(Member {
            // The sheet has no persistent identity; the row position stands in
            id: (index + 1).to_string(),
            nome_completo: nome,
            data_nascimento: cell(row, H_DATA_NASCIMENTO),
            idade: cell_i64(row, H_IDADE),
            rg: cell(row, H_RG),
            cpf: cell(row, H_CPF),
            telefone: cell(row, H_TELEFONE),
            email: cell(row, H_EMAIL),
            endereco: cell(row, H_ENDERECO),
            numero: cell(row, H_NUMERO),
            bairro: cell(row, H_BAIRRO),
            cidade: cell(row, H_CIDADE),
            estado: cell(row, H_ESTADO),
            cep: cell(row, H_CEP),
            cidade_nascimento: cell(row, H_CIDADE_NASCIMENTO),
            estado_nascimento: cell(row, H_ESTADO_NASCIMENTO),
            estado_civil: EstadoCivil::parse(&cell(row, H_ESTADO_CIVIL)),
            profissao: cell(row, H_PROFISSAO),
            cargo_ministerial: CargoMinisterial::parse(&cell(row, H_CARGO)),
            data_batismo: cell(row, H_DATA_BATISMO),
            data_ordenacao: (!data_ordenacao.is_empty()).then_some(data_ordenacao),
            igreja_batismo: cell(row, H_IGREJA_BATISMO),
            ativo: cell_ativo(row, H_ATIVO),
            observacoes: cell(row, H_OBSERVACOES),
            foto: detected(&columns.foto),
            link_ficha: detected(&columns.ficha),
            link_carteirinha: detected(&columns.carteirinha),
            data_cadastro: String::new(),
            data_atualizacao: String::new(),
        });
    }
    members
}

/// Map a member back to canonical headers for appending
pub fn member_sheet_row(m: &Member) -> Map<String, Value> {
    let mut row = Map::new();
    let mut put = |header: &str, value: &str| {
        row.insert(header.to_string(), json!(value));
    };
    put(canonical(MEMBER_NOME), &m.nome_completo);
    put(H_DATA_NASCIMENTO, &m.data_nascimento);
    put(H_RG, &m.rg);
    put(H_CPF, &m.cpf);
    put(H_TELEFONE, &m.telefone);
    put(H_EMAIL, &m.email);
    put(H_ENDERECO, &m.endereco);
    put(H_NUMERO, &m.numero);
    put(H_BAIRRO, &m.bairro);
    put(H_CIDADE, &m.cidade);
    put(H_ESTADO, &m.estado);
    put(H_CEP, &m.cep);
    put(H_CIDADE_NASCIMENTO, &m.cidade_nascimento);
    put(H_ESTADO_NASCIMENTO, &m.estado_nascimento);
    put(H_ESTADO_CIVIL, m.estado_civil.as_str());
    put(H_PROFISSAO, &m.profissao);
    put(H_CARGO, m.cargo_ministerial.as_str());
    put(H_DATA_BATISMO, &m.data_batismo);
    put(H_DATA_ORDENACAO, m.data_ordenacao.as_deref().unwrap_or(""));
    put(H_IGREJA_BATISMO, &m.igreja_batismo);
    put(H_ATIVO, if m.ativo { "Sim" } else { "Não" });
    put(H_OBSERVACOES, &m.observacoes);
    put(canonical(MEMBER_FOTO), &m.foto);
    put(canonical(MEMBER_FICHA), &m.link_ficha);
    put(canonical(MEMBER_CARTEIRINHA), &m.link_carteirinha);
    row.insert(H_IDADE.to_string(), json!(m.idade));
    row
}

/// Parse church rows; the sheet flattens address and pastor fields
pub fn parse_church_rows(rows: &[Map<String, Value>]) -> Vec<Church> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let headers: Vec<String> = first.keys().cloned().collect();
    let nome_col = detect_column(&headers, CHURCH_NOME);

    let mut churches = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let nome = nome_col
            .as_deref()
            .map(|c| cell(row, c))
            .unwrap_or_default();
        if nome.is_empty() || nome_col.as_deref() == Some(nome.as_str()) {
            continue;
        }

        churches.push(Church {
            id: (index + 1).to_string(),
            classificacao: cell(row, H_CLASSIFICACAO),
            nome,
            tipo: cell(row, H_TIPO),
            endereco: Endereco {
                rua: cell(row, H_RUA),
                numero: cell(row, H_NUMERO),
                bairro: cell(row, H_BAIRRO),
                cidade: cell(row, H_CIDADE),
                estado: cell(row, H_ESTADO),
                cep: cell(row, H_CEP),
            },
            pastor: Pastor {
                nome: cell(row, H_PASTOR),
                telefone: cell(row, H_PASTOR_TELEFONE),
                email: cell(row, H_PASTOR_EMAIL),
                credencial: cell(row, H_PASTOR_CREDENCIAL),
                endereco: Endereco::default(),
            },
            membros_iniciais: cell_i64(row, H_MEMBROS_INICIAIS),
            membros_atuais: cell_i64(row, H_MEMBROS_ATUAIS),
            almas_batizadas: cell_i64(row, H_ALMAS_BATIZADAS),
            tem_escola_criancas: cell_sim(row, H_ESCOLA_CRIANCAS),
            criancas_quantidade: cell_i64(row, H_CRIANCAS_QUANTIDADE),
            dias_funcionamento: cell(row, H_DIAS_FUNCIONAMENTO),
            data_cadastro: String::new(),
            data_atualizacao: String::new(),
        });
    }
    churches
}

/// Map a church back to canonical headers for appending
pub fn church_sheet_row(c: &Church) -> Map<String, Value> {
    let mut row = Map::new();
    let mut put = |header: &str, value: &str| {
        row.insert(header.to_string(), json!(value));
    };
    put(canonical(CHURCH_NOME), &c.nome);
    put(H_CLASSIFICACAO, &c.classificacao);
    put(H_TIPO, &c.tipo);
    put(H_RUA, &c.endereco.rua);
    put(H_NUMERO, &c.endereco.numero);
    put(H_BAIRRO, &c.endereco.bairro);
    put(H_CIDADE, &c.endereco.cidade);
    put(H_ESTADO, &c.endereco.estado);
    put(H_CEP, &c.endereco.cep);
    put(H_PASTOR, &c.pastor.nome);
    put(H_PASTOR_TELEFONE, &c.pastor.telefone);
    put(H_PASTOR_EMAIL, &c.pastor.email);
    put(H_PASTOR_CREDENCIAL, &c.pastor.credencial);
    put(
        H_ESCOLA_CRIANCAS,
        if c.tem_escola_criancas { "Sim" } else { "Não" },
    );
    put(H_DIAS_FUNCIONAMENTO, &c.dias_funcionamento);
    row.insert(H_MEMBROS_INICIAIS.to_string(), json!(c.membros_iniciais));
    row.insert(H_MEMBROS_ATUAIS.to_string(), json!(c.membros_atuais));
    row.insert(H_ALMAS_BATIZADAS.to_string(), json!(c.almas_batizadas));
    row.insert(
        H_CRIANCAS_QUANTIDADE.to_string(),
        json!(c.criancas_quantidade),
    );
    row
}
