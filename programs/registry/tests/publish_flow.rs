use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use fragments::{FragmentBalance, FragmentLedger};
use ledger_core::AuthorityError;
use registry::errors::RegistryError;
use registry::{AccessGrant, Model, ModelRegistry};
use rewards::{RewardManager, RewardTemplate};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account;
use solana_sdk::account_info::AccountInfo;
use solana_sdk::entrypoint::ProgramResult;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::system_program;
use solana_sdk::transaction::{Transaction, TransactionError};

const PRICE: u64 = LAMPORTS_PER_SOL / 10;

fn process_fragments(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    fragments::entry(program_id, accounts, data)
}

fn process_completions(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    completions::entry(program_id, accounts, data)
}

fn process_rewards(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    rewards::entry(program_id, accounts, data)
}

fn process_registry(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    registry::entry(program_id, accounts, data)
}

fn pda(seeds: &[&[u8]], program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(seeds, program_id).0
}

fn registry_address() -> Pubkey {
    pda(&[ModelRegistry::SEED], &registry::ID)
}

fn model_address(model_id: u64) -> Pubkey {
    pda(&[Model::SEED, &model_id.to_le_bytes()], &registry::ID)
}

fn grant_address(model_id: u64, buyer: &Pubkey) -> Pubkey {
    pda(
        &[AccessGrant::SEED, &model_id.to_le_bytes(), buyer.as_ref()],
        &registry::ID,
    )
}

fn manager_address() -> Pubkey {
    pda(&[RewardManager::SEED], &rewards::ID)
}

fn template_address(template_id: u64) -> Pubkey {
    pda(&[RewardTemplate::SEED, &template_id.to_le_bytes()], &rewards::ID)
}

fn fragment_ledger_address() -> Pubkey {
    pda(&[FragmentLedger::SEED], &fragments::ID)
}

fn completion_ledger_address() -> Pubkey {
    pda(&[completions::CompletionLedger::SEED], &completions::ID)
}

fn balance_address(holder: &Pubkey, token_id: u64) -> Pubkey {
    pda(
        &[FragmentBalance::SEED, holder.as_ref(), &token_id.to_le_bytes()],
        &fragments::ID,
    )
}

fn custom_code(err: BanksClientError) -> u32 {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("expected a program error, got {:?}", other),
    }
}

fn funded(program_test: &mut ProgramTest) -> Keypair {
    let keypair = Keypair::new();
    program_test.add_account(
        keypair.pubkey(),
        Account {
            lamports: 10 * LAMPORTS_PER_SOL,
            ..Account::default()
        },
    );
    keypair
}

struct Env {
    ctx: ProgramTestContext,
    alice: Keypair,
    bob: Keypair,
}

impl Env {
    async fn send(&mut self, ixs: &[Instruction], signers: &[&Keypair]) -> Result<(), BanksClientError> {
        let mut all = vec![&self.ctx.payer];
        all.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            ixs,
            Some(&self.ctx.payer.pubkey()),
            &all,
            self.ctx.last_blockhash,
        );
        self.ctx.banks_client.process_transaction(tx).await
    }

    async fn fetch<T: AccountDeserialize>(&mut self, address: Pubkey) -> Option<T> {
        let account = self.ctx.banks_client.get_account(address).await.unwrap()?;
        Some(T::try_deserialize(&mut account.data.as_slice()).unwrap())
    }

    async fn lamports(&mut self, address: Pubkey) -> u64 {
        self.ctx.banks_client.get_balance(address).await.unwrap()
    }

    fn deployer(&self) -> Pubkey {
        self.ctx.payer.pubkey()
    }

    /// Publish as `uploader`; the reward goes to slot `slot` of template 0
    fn publish_ix(&self, uploader: Pubkey, model_id: u64, slot: u64, content_ref: &str, price: u64) -> Instruction {
        Instruction {
            program_id: registry::ID,
            accounts: registry::accounts::Publish {
                uploader,
                registry: registry_address(),
                model: model_address(model_id),
                reward_manager: manager_address(),
                reward_template: template_address(0),
                fragment_ledger: fragment_ledger_address(),
                recipient_balance: balance_address(&uploader, slot),
                fragments_program: fragments::ID,
                rewards_program: rewards::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: registry::instruction::Publish {
                content_ref: content_ref.to_string(),
                price,
            }
            .data(),
        }
    }

    fn update_ix(&self, uploader: Pubkey, model_id: u64, new_content_ref: &str) -> Instruction {
        Instruction {
            program_id: registry::ID,
            accounts: registry::accounts::UpdateModel {
                uploader,
                model: model_address(model_id),
            }
            .to_account_metas(None),
            data: registry::instruction::Update {
                model_id,
                new_content_ref: new_content_ref.to_string(),
            }
            .data(),
        }
    }

    fn purchase_ix(&self, buyer: Pubkey, model_id: u64, uploader: Pubkey, payment: u64) -> Instruction {
        Instruction {
            program_id: registry::ID,
            accounts: registry::accounts::PurchaseAccess {
                buyer,
                registry: registry_address(),
                model: model_address(model_id),
                grant: grant_address(model_id, &buyer),
                uploader,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: registry::instruction::PurchaseAccess { model_id, payment }.data(),
        }
    }

    /// Hand the reward manager's slot to the registry PDA
    async fn delegate_rewards_to_registry(&mut self) {
        let ix = Instruction {
            program_id: rewards::ID,
            accounts: rewards::accounts::TransferManagerAuthority {
                holder: self.deployer(),
                manager: manager_address(),
            }
            .to_account_metas(None),
            data: rewards::instruction::TransferAuthority {
                new_holder: registry_address(),
            }
            .data(),
        };
        self.send(&[ix], &[]).await.unwrap();
    }
}

/// Deploy all four programs and wire every link of the authority chain
/// except the last one (reward manager to registry).
async fn deploy() -> Env {
    let mut program_test = ProgramTest::default();
    program_test.prefer_bpf(false);
    program_test.add_program("fragments", fragments::ID, processor!(process_fragments));
    program_test.add_program("completions", completions::ID, processor!(process_completions));
    program_test.add_program("rewards", rewards::ID, processor!(process_rewards));
    program_test.add_program("registry", registry::ID, processor!(process_registry));
    let alice = funded(&mut program_test);
    let bob = funded(&mut program_test);

    let ctx = program_test.start_with_context().await;
    let mut env = Env { ctx, alice, bob };
    let deployer = env.deployer();

    let ledgers = vec![
        Instruction {
            program_id: fragments::ID,
            accounts: fragments::accounts::InitializeLedger {
                payer: deployer,
                ledger: fragment_ledger_address(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: fragments::instruction::Initialize {
                base_uri: "https://example.com/{id}.json".to_string(),
            }
            .data(),
        },
        Instruction {
            program_id: completions::ID,
            accounts: completions::accounts::InitializeLedger {
                payer: deployer,
                ledger: completion_ledger_address(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: completions::instruction::Initialize {}.data(),
        },
        Instruction {
            program_id: rewards::ID,
            accounts: rewards::accounts::InitializeManager {
                payer: deployer,
                manager: manager_address(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: rewards::instruction::Initialize {
                fragment_ledger: fragment_ledger_address(),
                completion_ledger: completion_ledger_address(),
                value_token: Pubkey::new_unique(),
            }
            .data(),
        },
        Instruction {
            program_id: fragments::ID,
            accounts: fragments::accounts::TransferLedgerAuthority {
                holder: deployer,
                ledger: fragment_ledger_address(),
            }
            .to_account_metas(None),
            data: fragments::instruction::TransferAuthority {
                new_holder: manager_address(),
            }
            .data(),
        },
        Instruction {
            program_id: completions::ID,
            accounts: completions::accounts::TransferLedgerAuthority {
                holder: deployer,
                ledger: completion_ledger_address(),
            }
            .to_account_metas(None),
            data: completions::instruction::TransferAuthority {
                new_holder: manager_address(),
            }
            .data(),
        },
    ];
    env.send(&ledgers, &[]).await.unwrap();

    let template_and_registry = vec![
        Instruction {
            program_id: rewards::ID,
            accounts: rewards::accounts::CreateTemplate {
                creator: deployer,
                manager: manager_address(),
                template: template_address(0),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: rewards::instruction::CreateTemplate {
                final_ref: "ipfs://final_template0".to_string(),
                fragment_refs: (0..16).map(|i| format!("ipfs://frag_template0_{}", i)).collect(),
            }
            .data(),
        },
        Instruction {
            program_id: registry::ID,
            accounts: registry::accounts::InitializeRegistry {
                payer: deployer,
                registry: registry_address(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: registry::instruction::Initialize {
                reward_manager: manager_address(),
                default_template_id: 0,
            }
            .data(),
        },
    ];
    env.send(&template_and_registry, &[]).await.unwrap();

    env
}

#[tokio::test]
async fn publish_rolls_back_without_reward_authority() {
    let mut env = deploy().await;
    let uploader = env.alice.insecure_clone();
    let alice = uploader.pubkey();

    let ix = env.publish_ix(alice, 1, 0, "ipfs://cid1", PRICE);
    let err = env.send(&[ix], &[&uploader]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(AuthorityError::Unauthorized));

    assert!(env.fetch::<Model>(model_address(1)).await.is_none());
    assert!(env.fetch::<FragmentBalance>(balance_address(&alice, 0)).await.is_none());
    let registry = env.fetch::<ModelRegistry>(registry_address()).await.unwrap();
    assert_eq!(registry.model_count, 0);
    let template = env.fetch::<RewardTemplate>(template_address(0)).await.unwrap();
    assert_eq!(template.issued_count, 0);
}

#[tokio::test]
async fn publish_registers_model_and_rewards_uploader() {
    let mut env = deploy().await;
    env.delegate_rewards_to_registry().await;
    let alice = env.alice.insecure_clone();
    let bob = env.bob.insecure_clone();

    let ix = env.publish_ix(alice.pubkey(), 1, 0, "ipfs://cid1", PRICE);
    env.send(&[ix], &[&alice]).await.unwrap();
    let ix = env.publish_ix(bob.pubkey(), 2, 1, "ipfs://cid2", PRICE);
    env.send(&[ix], &[&bob]).await.unwrap();

    let model = env.fetch::<Model>(model_address(1)).await.unwrap();
    assert_eq!(model.model_id, 1);
    assert_eq!(model.uploader, alice.pubkey());
    assert_eq!(model.version, 1);
    assert_eq!(model.version_history, vec![1]);
    assert_eq!(env.fetch::<Model>(model_address(2)).await.unwrap().uploader, bob.pubkey());

    // round-robin: the first publisher gets slot 0, the second slot 1
    let first = env.fetch::<FragmentBalance>(balance_address(&alice.pubkey(), 0)).await.unwrap();
    assert_eq!(first.amount, 1);
    let second = env.fetch::<FragmentBalance>(balance_address(&bob.pubkey(), 1)).await.unwrap();
    assert_eq!(second.amount, 1);

    let registry = env.fetch::<ModelRegistry>(registry_address()).await.unwrap();
    assert_eq!(registry.model_count, 2);
}

#[tokio::test]
async fn publish_rejects_zero_price() {
    let mut env = deploy().await;
    env.delegate_rewards_to_registry().await;
    let alice = env.alice.insecure_clone();

    let ix = env.publish_ix(alice.pubkey(), 1, 0, "ipfs://cid1", 0);
    let err = env.send(&[ix], &[&alice]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::InvalidPrice));

    assert!(env.fetch::<Model>(model_address(1)).await.is_none());
    assert!(env.fetch::<FragmentBalance>(balance_address(&alice.pubkey(), 0)).await.is_none());
}

#[tokio::test]
async fn only_the_uploader_updates() {
    let mut env = deploy().await;
    env.delegate_rewards_to_registry().await;
    let alice = env.alice.insecure_clone();
    let bob = env.bob.insecure_clone();

    let ix = env.publish_ix(alice.pubkey(), 1, 0, "ipfs://cid6", PRICE);
    env.send(&[ix], &[&alice]).await.unwrap();

    let ix = env.update_ix(bob.pubkey(), 1, "ipfs://cid6_v2");
    let err = env.send(&[ix], &[&bob]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::NotOwner));

    let ix = env.update_ix(alice.pubkey(), 2, "ipfs://cid6_v2");
    let err = env.send(&[ix], &[&alice]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::NotFound));

    let ix = env.update_ix(alice.pubkey(), 1, "ipfs://cid6_v2");
    env.send(&[ix], &[&alice]).await.unwrap();

    let model = env.fetch::<Model>(model_address(1)).await.unwrap();
    assert_eq!(model.content_ref, "ipfs://cid6_v2");
    assert_eq!(model.version, 2);
    assert_eq!(model.version_history, vec![1, 2]);
}

#[tokio::test]
async fn purchase_pays_uploader_once() {
    let mut env = deploy().await;
    env.delegate_rewards_to_registry().await;
    let alice = env.alice.insecure_clone();
    let bob = env.bob.insecure_clone();

    let ix = env.publish_ix(alice.pubkey(), 1, 0, "ipfs://cid1", PRICE);
    env.send(&[ix], &[&alice]).await.unwrap();
    assert!(env.fetch::<AccessGrant>(grant_address(1, &bob.pubkey())).await.is_none());

    let ix = env.purchase_ix(bob.pubkey(), 1, alice.pubkey(), PRICE - 1);
    let err = env.send(&[ix], &[&bob]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::InsufficientPayment));

    // payment routed anywhere but the uploader is refused
    let ix = env.purchase_ix(bob.pubkey(), 1, env.deployer(), PRICE);
    let err = env.send(&[ix], &[&bob]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::PayeeMismatch));

    let before = env.lamports(alice.pubkey()).await;
    let ix = env.purchase_ix(bob.pubkey(), 1, alice.pubkey(), PRICE);
    env.send(&[ix], &[&bob]).await.unwrap();
    assert_eq!(env.lamports(alice.pubkey()).await, before + PRICE);

    let grant = env.fetch::<AccessGrant>(grant_address(1, &bob.pubkey())).await.unwrap();
    assert!(grant.granted);
    assert_eq!(grant.paid, PRICE);

    let ix = env.purchase_ix(bob.pubkey(), 1, alice.pubkey(), PRICE + 1);
    let err = env.send(&[ix], &[&bob]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::AlreadyPurchased));
    assert_eq!(env.lamports(alice.pubkey()).await, before + PRICE);

    let registry = env.fetch::<ModelRegistry>(registry_address()).await.unwrap();
    assert_eq!(registry.total_sales, 1);
}

#[tokio::test]
async fn purchase_of_unknown_model_is_not_found() {
    let mut env = deploy().await;
    let alice = env.alice.pubkey();
    let bob = env.bob.insecure_clone();

    let ix = env.purchase_ix(bob.pubkey(), 9, alice, PRICE);
    let err = env.send(&[ix], &[&bob]).await.unwrap_err();
    assert_eq!(custom_code(err), u32::from(RegistryError::NotFound));
    assert!(env.fetch::<AccessGrant>(grant_address(9, &bob.pubkey())).await.is_none());
}
